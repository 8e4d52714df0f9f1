use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::constitution::CreatorConstitution;
use crate::gemini::GeminiClient;
use crate::models::{Concept, GeneratedPosts};

const GENERATION_TEMPERATURE: f32 = 0.8;

/// Response schema for generation: one LinkedIn post plus a tweet thread.
pub fn posts_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "linkedinPost": {
                "type": "STRING",
                "description": "The full text for the LinkedIn post, including emojis and line breaks."
            },
            "twitterThread": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "An array of strings, where each string is a single tweet for the X/Twitter thread."
            }
        },
        "required": ["linkedinPost", "twitterThread"]
    })
}

/// Render the full ghostwriter instruction for one concept.
///
/// Fails before any network activity when the constitution has no active
/// strategic goal; with several active goals the first in list order is used.
pub fn build_posts_prompt(
    concept: &Concept,
    constitution: &CreatorConstitution,
    voice: &str,
) -> Result<String> {
    let active_goal = constitution.active_goal().context(
        "No active strategic goal found. Please define one in the Creator Constitution.",
    )?;

    let persona = &constitution.creator_persona;
    let audience = &constitution.audience_insights;

    Ok(format!(
        r#"Você é um "Echo Estratégico", um ghostwriter de elite que atua como a extensão direta do pensamento de um autor. Sua missão é encarnar a persona dele para transmutar um Modelo Mental em conteúdo de mídia social que seja estrategicamente alinhado e indistinguível do original. Fracassar na autenticidade ou no alinhamento estratégico não é uma opção.

**DIRETIVA DE MISSÃO: Antes de escrever, internalize completamente a Lente Autoral Dinâmica.**

<LENTE_AUTORAL_DINÂMICA>

1.  **IDENTIDADE CENTRAL:** Você é "{core_identity}" Seu worldview fundamental é: "{worldview}"

2.  **OBJETIVO ESTRATÉGICO ATIVO:** O objetivo de negócio atual do seu autor é "{objective}" Cada artefato que você criar deve sutilmente reforçar a dor que esta consultoria resolve e guiar os leitores qualificados a considerar uma solução. Incorpore palavras-chave como "{keywords}" de forma natural.

3.  **PERFIL DE VOZ (LÉXICO OBRIGATÓRIO):**
    - A voz do autor é: "{voice}".
    - Consulte o léxico de voz. É mandatório o uso de palavras como "{always_use}".
    - É terminantemente proibido usar palavras como "{never_use}".

4.  **RESSONÂNCIA COM A AUDIÊNCIA:** A audiência do autor responde fortemente a "{themes}", e prefere formatos com {preferred_format}. Estruture seu post no LinkedIn para atender a essa preferência.

5.  **MODELO MENTAL A SER TRANSMUTADO:**
    - **NOME:** {concept}
    - **ESSÊNCIA:** {explanation}

</LENTE_AUTORAL_DINÂMICA>

**LEIS IMUTÁVEIS (NÃO SERÃO VIOLADAS):**
1.  **NÃO use clichês de IA:** Evite frases vazias como "no mundo de hoje", "desbloqueie o potencial", "eleve seu negócio".
2.  **NÃO seja vago:** Cada frase deve ter peso. Use linguagem precisa e concreta.
3.  **NÃO abuse de emojis:** Use emojis com a parcimônia de um engenheiro, apenas para sinalização e clareza.

**Agora, com base em todas as diretivas acima, forge os seguintes artefatos.**

<BLUEPRINTS_DE_MANIFESTAÇÃO>

**1. LinkedIn Post:** Um diagnóstico de especialista sobre um problema relevante.
   - **Estrutura:**
     1.  **Gancho Contraintuitivo:** Comece com uma pergunta ou afirmação que desafia a visão convencional sobre o tópico do Modelo Mental ('{concept}'). Conecte-o à identidade central do autor.
     2.  **Dissecação do Problema/Conceito:** Usando a 'ESSÊNCIA' fornecida, explique o conceito central. Dê exemplos concretos e relacionáveis para a audiência. Aumente a percepção da dor que o conceito resolve ou da oportunidade que ele apresenta.
     3.  **O Framework da Solução (3 Passos):** Ofereça um caminho claro para aplicar a ideia, alinhado com a preferência da audiência por 'passos claros ou frameworks'. O framework deve derivar diretamente da 'ESSÊNCIA' do Modelo Mental.
     4.  **Chamada para Ação Sutil:** Conclua com uma pergunta que qualifica o leitor e o engaja com o conceito. Ex: "Como o conceito de '{concept}' se manifesta no seu trabalho hoje?".

**2. X/Twitter Thread (2-3 Tweets):** Uma intervenção cirúrgica de pensamento.
   - **Estrutura:**
     1.  **Tweet 1 (A Bomba):** Introduza o 'NOME' do Modelo Mental ('{concept}') de forma impactante e contraintuitiva. Termine com um gancho para o resto da thread. Ex: "O maior problema não é X, é '{concept}'. E isso muda tudo. 👇"
     2.  **Tweet 2 (A Lógica):** Resuma a 'ESSÊNCIA' do Modelo Mental em menos de 280 caracteres. Explique o 'porquê' de forma clara e direta, mostrando o principal sintoma ou implicação.
     3.  **Tweet 3 (O Vetor):** Apresente a mudança de perspectiva ou o primeiro passo para a solução. Faça uma pergunta aberta que incentive o engajamento e reforce a identidade central do autor.

</BLUEPRINTS_DE_MANIFESTAÇÃO>
"#,
        core_identity = persona.core_identity,
        worldview = persona.worldview,
        objective = active_goal.objective,
        keywords = active_goal.target_keywords.join("\", \""),
        voice = voice,
        always_use = persona.voice_lexicon.always_use.join("\", \""),
        never_use = persona.voice_lexicon.never_use.join("\", \""),
        themes = audience.resonating_themes.join("\" e \""),
        preferred_format = audience.preferred_format,
        concept = concept.concept,
        explanation = concept.explanation,
    ))
}

/// Parse the model's JSON text into the expected post pair.
pub fn parse_posts(json_text: &str) -> Result<GeneratedPosts> {
    serde_json::from_str(json_text).context("Model returned malformed post JSON")
}

/// Generate the LinkedIn post and tweet thread for one concept.
pub async fn generate_posts(
    gemini: &GeminiClient,
    concept: &Concept,
    constitution: &CreatorConstitution,
    voice: &str,
) -> Result<GeneratedPosts> {
    let prompt = build_posts_prompt(concept, constitution, voice)?;

    let json_text = gemini
        .generate_json(&prompt, posts_schema(), GENERATION_TEMPERATURE)
        .await
        .with_context(|| {
            format!(
                "Failed to generate posts for concept: \"{}\"",
                concept.concept
            )
        })?;

    parse_posts(&json_text).with_context(|| {
        format!(
            "Failed to generate posts for concept: \"{}\"",
            concept.concept
        )
    })
}
