use crate::clients::models::common::{ExerciseRef, FitnessLevel};
use crate::clients::models::requests::GenerationRequest;

pub const FILE_EXTRACTION_PROMPT: &str = "Extract and return all text content from this document without any analysis or summary. Just return the raw text content.";

const NOT_PROVIDED: &str = "None provided";

pub fn format_exercises_for_prompt(exercises: &[ExerciseRef]) -> String {
    if exercises.is_empty() {
        return format!("{}\n", NOT_PROVIDED);
    }

    exercises
        .iter()
        .map(|exercise| {
            let details: Vec<String> = [
                exercise.equipment.as_deref().map(|e| format!("equipment: {}", e)),
                exercise.target.as_deref().map(|t| format!("target: {}", t)),
                exercise.body_part.as_deref().map(|b| format!("body part: {}", b)),
            ]
            .into_iter()
            .flatten()
            .collect();

            if details.is_empty() {
                format!("- {}\n", exercise.name)
            } else {
                format!("- {} ({})\n", exercise.name, details.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

fn text_or_placeholder(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        NOT_PROVIDED
    } else {
        trimmed
    }
}

fn fitness_level_guidance(level: FitnessLevel) -> &'static str {
    match level {
        FitnessLevel::Beginner => {
            "Prioritize movement quality, bodyweight and light loads, RPE 5-6, full rest between sets"
        }
        FitnessLevel::Intermediate => {
            "Moderate loads and volume, RPE 6-8, simple progressions on the main lifts"
        }
        FitnessLevel::Advanced => {
            "Higher intensity and volume, RPE 7-9, complex movements and conditioning pieces"
        }
        FitnessLevel::Elite => {
            "Competition-level intensity, RPE 8-10, advanced programming with precise loading"
        }
    }
}

fn day_template(number_of_days: u32) -> String {
    (1..=number_of_days)
        .map(|day| {
            format!(
                r#"    "day{}": {{
        "description": "Focus and intent of the session",
        "warmup": "Detailed warmup",
        "workout": "Main workout with sets, reps and rest",
        "strength": "Strength component",
        "notes": "Coaching notes and scaling options"
    }}"#,
                day
            )
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

pub fn build_workout_generation_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"You are an expert strength and conditioning coach. Create a {days}-day training program.

ATHLETE PROFILE:
- Fitness level: {level}
- Guidance: {guidance}

INJURIES AND LIMITATIONS:
{injuries}

PRESCRIBED EXERCISES:
{prescribed}

AVAILABLE EXERCISES AND EQUIPMENT:
{exercises}
WEATHER CONDITIONS:
{weather}

ADDITIONAL REQUEST:
{prompt}

PROGRAMMING RULES:
1. Generate exactly {days} days, keyed "day1" through "day{days}"
2. Work around every listed injury, never load an injured area
3. Include the prescribed exercises when provided
4. Only use the available exercises and equipment when provided
5. Adapt outdoor work to the weather conditions when provided
6. Use plain text inside every field, no markdown

OUTPUT FORMAT:
Return ONLY a JSON object with this exact structure:
{{
{template}
}}"#,
        days = request.number_of_days,
        level = request.fitness_level,
        guidance = fitness_level_guidance(request.fitness_level),
        injuries = text_or_placeholder(&request.injuries_text),
        prescribed = text_or_placeholder(&request.prescribed_exercises_text),
        exercises = format_exercises_for_prompt(&request.selected_exercises),
        weather = text_or_placeholder(&request.weather_text),
        prompt = text_or_placeholder(&request.prompt_text),
        template = day_template(request.number_of_days),
    )
}
