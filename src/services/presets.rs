use serde::Serialize;

use crate::clients::models::common::FitnessLevel;

struct PresetDefinition {
    key: &'static str,
    category: &'static str,
    title: &'static str,
    description: &'static str,
    details: &'static str,
    fitness_level: FitnessLevel,
    number_of_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPreset {
    pub key: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub prescribed_exercises: String,
    pub fitness_level: FitnessLevel,
    pub number_of_days: u32,
}

const PRESETS: &[PresetDefinition] = &[
    PresetDefinition {
        key: "Fran",
        category: "CrossFit",
        title: "CrossFit - Fran",
        description: "A high-intensity benchmark WOD combining thrusters and pull-ups for time.",
        details: "21-15-9 reps for time:\nThrusters (95/65 lb)\nPull-ups",
        fitness_level: FitnessLevel::Advanced,
        number_of_days: 1,
    },
    PresetDefinition {
        key: "Murph",
        category: "CrossFit",
        title: "CrossFit - Murph",
        description: "A grueling hero WOD featuring a 1-mile run, 100 pull-ups, 200 push-ups, 300 squats, and another 1-mile run, often done with a weighted vest.",
        details: "For time:\n1 mile Run\n100 Pull-ups\n200 Push-ups\n300 Squats\n1 mile Run",
        fitness_level: FitnessLevel::Advanced,
        number_of_days: 1,
    },
    PresetDefinition {
        key: "Cindy",
        category: "CrossFit",
        title: "CrossFit - Cindy",
        description: "A 20-minute AMRAP (as many rounds as possible) of 5 pull-ups, 10 push-ups, and 15 air squats.",
        details: "20 minute AMRAP:\n5 Pull-ups\n10 Push-ups\n15 Air Squats",
        fitness_level: FitnessLevel::Intermediate,
        number_of_days: 1,
    },
    PresetDefinition {
        key: "Diane",
        category: "CrossFit",
        title: "CrossFit - Diane",
        description: "A fast-paced WOD of deadlifts and handstand push-ups, completed for time.",
        details: "21-15-9 reps for time:\nDeadlifts (225/155 lb)\nHandstand Push-ups",
        fitness_level: FitnessLevel::Advanced,
        number_of_days: 1,
    },
    PresetDefinition {
        key: "Grace",
        category: "CrossFit",
        title: "CrossFit - Grace",
        description: "A sprint-style WOD consisting of 30 clean and jerks at 135 lbs (95 lbs for women).",
        details: "For time:\n30 Clean and Jerks (135/95 lb)",
        fitness_level: FitnessLevel::Advanced,
        number_of_days: 1,
    },
    PresetDefinition {
        key: "SealFit",
        category: "Military",
        title: "Military - SealFit",
        description: "A Navy SEAL-inspired program blending endurance, strength, and mental toughness training.",
        details: "Warm-up:\n400m run\n25 push-ups\n25 air squats\n\nMain workout:\n5 rounds for time:\n400m run\n25 pull-ups\n50 push-ups\n75 squats",
        fitness_level: FitnessLevel::Advanced,
        number_of_days: 5,
    },
    PresetDefinition {
        key: "Ranger_School_PT_Program",
        category: "Military",
        title: "Military - Ranger School PT",
        description: "A rigorous physical training regimen designed to prepare soldiers for the intense demands of Ranger School.",
        details: "5 mile run\n100 push-ups\n100 sit-ups\n20 pull-ups\n12 mile ruck march with 35lb pack",
        fitness_level: FitnessLevel::Advanced,
        number_of_days: 6,
    },
    PresetDefinition {
        key: "Army_Combat_Fitness_Test_ACFT",
        category: "Military",
        title: "Military - ACFT",
        description: "The current U.S. Army fitness test, including deadlifts, sprint-drag-carry drills, and a two-mile run.",
        details: "3 Rep Max Deadlift\nStanding Power Throw\nHand Release Push-ups\nSprint-Drag-Carry\nLeg Tuck\n2 Mile Run",
        fitness_level: FitnessLevel::Intermediate,
        number_of_days: 3,
    },
    PresetDefinition {
        key: "Recon_Ron_Pull_Up_Program",
        category: "Military",
        title: "Military - Recon Ron",
        description: "A structured pull-up progression plan used by military personnel to build upper-body strength.",
        details: "Progressive Pull-up Program:\nSet 1: Max Reps\nSet 2: 75% of Max\nSet 3-5: 50% of Max\nRest 90 seconds between sets",
        fitness_level: FitnessLevel::Intermediate,
        number_of_days: 3,
    },
    PresetDefinition {
        key: "Operator_Ugly",
        category: "Military",
        title: "Military - Operator Ugly",
        description: "A brutal fitness test designed for special forces, incorporating strength, endurance, and tactical readiness elements.",
        details: "For time:\n1 mile run\n100 burpees\n100 pull-ups\n100 push-ups\n100 sit-ups\n1 mile run",
        fitness_level: FitnessLevel::Advanced,
        number_of_days: 1,
    },
    PresetDefinition {
        key: "Arnold_Blueprint_to_Mass",
        category: "Bodybuilding",
        title: "Bodybuilding - Arnold Blueprint",
        description: "A high-volume program based on Arnold Schwarzenegger's legendary training routine.",
        details: "Chest & Back:\nBench Press: 5x8-12\nWide-Grip Pull-Ups: 5x failure\nIncline Bench: 4x8-12\nBarbell Rows: 4x8-12",
        fitness_level: FitnessLevel::Intermediate,
        number_of_days: 6,
    },
    PresetDefinition {
        key: "Dorian_Yates_Blood_and_Guts",
        category: "Bodybuilding",
        title: "Bodybuilding - Blood and Guts",
        description: "An intense, low-volume, high-intensity training method focused on reaching muscle failure.",
        details: "Back:\nDeadlifts: 1x6-8\nBarbell Rows: 1x6-8\nPull-downs: 1x6-8\nSeated Rows: 1x6-8",
        fitness_level: FitnessLevel::Advanced,
        number_of_days: 4,
    },
    PresetDefinition {
        key: "German_Volume_Training_GVT",
        category: "Bodybuilding",
        title: "Bodybuilding - GVT",
        description: "A hypertrophy program centered around 10 sets of 10 reps for maximal muscle growth.",
        details: "Day 1 - Chest & Back:\nBench Press: 10x10\nBent Over Rows: 10x10\nIncline DB Press: 3x10\nPull-downs: 3x10",
        fitness_level: FitnessLevel::Intermediate,
        number_of_days: 5,
    },
    PresetDefinition {
        key: "Push_Pull_Legs_PPL",
        category: "Bodybuilding",
        title: "Bodybuilding - PPL",
        description: "A widely used split routine that targets pushing muscles, pulling muscles, and legs separately.",
        details: "Push Day:\nBench Press: 4x8-12\nOHP: 4x8-12\nIncline DB Press: 3x10-15\nLateral Raises: 3x12-15",
        fitness_level: FitnessLevel::Intermediate,
        number_of_days: 6,
    },
    PresetDefinition {
        key: "Jim_Wendlers_5_3_1",
        category: "Bodybuilding",
        title: "Bodybuilding - 5/3/1",
        description: "A strength-focused program emphasizing progressive overload with squats, deadlifts, bench press, and overhead press.",
        details: "Week 1:\nSet 1: 65% x 5\nSet 2: 75% x 5\nSet 3: 85% x 5+\nBBB: 5x10 at 50%",
        fitness_level: FitnessLevel::Intermediate,
        number_of_days: 4,
    },
];

impl PresetDefinition {
    fn to_preset(&self) -> WorkoutPreset {
        WorkoutPreset {
            key: self.key.to_string(),
            category: self.category.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            prescribed_exercises: format!(
                "{}\n\nDescription:\n{}\n\nWorkout Details:\n{}",
                self.title, self.description, self.details
            ),
            fitness_level: self.fitness_level,
            number_of_days: self.number_of_days,
        }
    }
}

pub fn all_presets() -> Vec<WorkoutPreset> {
    PRESETS.iter().map(PresetDefinition::to_preset).collect()
}

pub fn find_preset(key: &str) -> Option<WorkoutPreset> {
    PRESETS
        .iter()
        .find(|preset| preset.key.eq_ignore_ascii_case(key))
        .map(PresetDefinition::to_preset)
}
