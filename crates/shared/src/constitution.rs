use serde::{Deserialize, Serialize};

/// Words the generated text must and must not use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceLexicon {
    pub always_use: Vec<String>,
    pub never_use: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorPersona {
    pub core_identity: String,
    pub worldview: String,
    pub voice_lexicon: VoiceLexicon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategicGoal {
    pub objective: String,
    pub status: GoalStatus,
    pub target_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceInsights {
    pub resonating_themes: Vec<String>,
    pub preferred_format: String,
}

/// The creator's strategic and identity framework used to condition every
/// generated post: who the author is, what business goal is in play, which
/// words are mandatory or forbidden, and what the audience responds to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorConstitution {
    pub creator_persona: CreatorPersona,
    pub strategic_goals: Vec<StrategicGoal>,
    pub audience_insights: AudienceInsights,
}

impl CreatorConstitution {
    /// The active strategic goal. When more than one goal is marked active,
    /// the first in list order wins.
    pub fn active_goal(&self) -> Option<&StrategicGoal> {
        self.strategic_goals
            .iter()
            .find(|g| g.status == GoalStatus::Active)
    }

    /// The stock constitution used when no override is stored.
    pub fn builtin() -> Self {
        Self {
            creator_persona: CreatorPersona {
                core_identity: "O Estrategista Pragmático que desmistifica negócios complexos com analogias de engenharia.".to_string(),
                worldview: "Sistemas, não metas, produzem resultados duradouros.".to_string(),
                voice_lexicon: VoiceLexicon {
                    always_use: vec![
                        "primeiros princípios".to_string(),
                        "atrito".to_string(),
                        "vetor".to_string(),
                        "alavancagem".to_string(),
                    ],
                    never_use: vec![
                        "mágica".to_string(),
                        "fórmula secreta".to_string(),
                        "atalho".to_string(),
                        "game-changer".to_string(),
                    ],
                },
            },
            strategic_goals: vec![
                StrategicGoal {
                    objective: "Gerar 20 leads qualificados para sua consultoria de otimização de processos.".to_string(),
                    status: GoalStatus::Active,
                    target_keywords: vec![
                        "eficiência operacional".to_string(),
                        "sistemas de negócio".to_string(),
                        "escalabilidade".to_string(),
                    ],
                },
                StrategicGoal {
                    objective: "Aumentar inscrições na newsletter em 15%.".to_string(),
                    status: GoalStatus::Inactive,
                    target_keywords: vec![
                        "insights semanais".to_string(),
                        "estratégia de negócio".to_string(),
                        "newsletter".to_string(),
                    ],
                },
            ],
            audience_insights: AudienceInsights {
                resonating_themes: vec![
                    "eliminação de desperdício".to_string(),
                    "automação inteligente".to_string(),
                ],
                preferred_format: "passos claros ou frameworks".to_string(),
            },
        }
    }
}
