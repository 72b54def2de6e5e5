// src/config/quadrant.rs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadrantId {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl QuadrantId {
    pub const ALL: [QuadrantId; 4] = [
        QuadrantId::UpperLeft,
        QuadrantId::UpperRight,
        QuadrantId::LowerLeft,
        QuadrantId::LowerRight,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuadrantId::UpperLeft => "upperLeft",
            QuadrantId::UpperRight => "upperRight",
            QuadrantId::LowerLeft => "lowerLeft",
            QuadrantId::LowerRight => "lowerRight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantTemplate {
    pub id: QuadrantId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub questions: [&'static str; 4],
}

pub const QUADRANTS: [QuadrantTemplate; 4] = [
    QuadrantTemplate {
        id: QuadrantId::UpperLeft,
        title: "Your Inner World",
        subtitle: "Individual Interior (I)",
        description: "Your thoughts, feelings, beliefs, and inner experience",
        questions: [
            "What emotions are you experiencing about this challenge?",
            "What beliefs or assumptions might be influencing your perspective?",
            "What fears or hopes do you have related to this situation?",
            "How does this challenge align with your personal values?",
        ],
    },
    QuadrantTemplate {
        id: QuadrantId::UpperRight,
        title: "Your Actions & Behaviors",
        subtitle: "Individual Exterior (It)",
        description: "Observable behaviors, actions, and physical aspects",
        questions: [
            "What specific actions have you taken so far?",
            "What skills or resources do you currently have?",
            "What measurable outcomes are you seeking?",
            "What physical or practical constraints exist?",
        ],
    },
    QuadrantTemplate {
        id: QuadrantId::LowerLeft,
        title: "Relationships & Culture",
        subtitle: "Collective Interior (We)",
        description: "Shared meanings, relationships, and cultural context",
        questions: [
            "How do your relationships influence this situation?",
            "What cultural or social expectations are at play?",
            "Who else is affected by this challenge?",
            "What shared values or norms are relevant?",
        ],
    },
    QuadrantTemplate {
        id: QuadrantId::LowerRight,
        title: "Systems & Environment",
        subtitle: "Collective Exterior (Its)",
        description: "Systems, structures, and environmental factors",
        questions: [
            "What organizational or systemic factors are involved?",
            "How does the broader environment affect this situation?",
            "What processes or structures need to be considered?",
            "What external forces or trends are relevant?",
        ],
    },
];

/// Quadrant shown at a wizard step. Steps 1 through 4 map onto the table in order.
pub fn template_for_step(step: usize) -> Option<&'static QuadrantTemplate> {
    match step {
        1..=4 => QUADRANTS.get(step - 1),
        _ => None,
    }
}
