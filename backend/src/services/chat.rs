//! Assistant chat service
//!
//! Replies come from the generative language API when a key is configured,
//! with the rule-based responder as fallback; without a key the rule-based
//! responder answers directly, so the endpoint always produces a message.
//! Replies are conditioned on the selected trail, the current weather and
//! its suitability verdict when the client supplies them.

use std::sync::Arc;

use shared::{ChatMessage, ChatRole, Difficulty, HikingSuitability, SuitabilityStatus, Trail, Weather};

use crate::error::AppResult;
use crate::external::gemini::Content;
use crate::external::GeminiClient;
use crate::Config;

/// Trail knowledge base injected into the assistant context
const TRAIL_KNOWLEDGE: &str = "\
Available hiking trails in Singapore:

1. MacRitchie TreeTop Walk - 11km loop, moderate difficulty. Famous 250m \
free-standing suspension bridge. Opens 9am-5pm, closed Mondays.
2. Bukit Timah Nature Reserve - 3.2km, moderate difficulty. Singapore's \
highest point (163.63m), primary rainforest.
3. Southern Ridges - 10km point-to-point, easy difficulty. Connects 5 parks \
including Henderson Waves bridge, great for sunsets.
4. Pulau Ubin Chek Jawa - 8.5km loop, easy difficulty. Offshore island, \
bumboat from Changi Point, check tide times.
5. Green Corridor (Rail Corridor) - 24km, easy difficulty. Former railway \
heritage trail, mostly flat, can be done in sections.
6. Sungei Buloh Wetland Reserve - 4km loop, easy difficulty. Famous for \
migratory birds Sep-Mar, crocodiles present - stay on paths.
7. Coney Island Park - 5.5km loop, easy difficulty. Rustic beaches and \
mangroves, no shops - bring water.
8. Chestnut Nature Park - 8.2km loop, moderate difficulty. Largest nature \
park, separate hiking and biking trails.
9. Labrador Nature Reserve - 2.1km loop, easy difficulty. Coastal reserve \
with WWII relics, connects to Southern Ridges.
10. Fort Canning Park - 2.5km loop, easy difficulty. Historical hilltop \
park in the city centre, spiral staircase photo spot.";

/// Assistant chat service
#[derive(Clone)]
pub struct ChatService {
    gemini: Option<GeminiClient>,
}

impl ChatService {
    /// Create a chat service from the application config
    pub fn new(http: reqwest::Client, config: Arc<Config>) -> Self {
        let gemini = config.gemini.is_configured().then(|| {
            GeminiClient::new(
                http,
                config.gemini.api_key.clone(),
                config.gemini.model.clone(),
                config.gemini.api_endpoint.clone(),
            )
        });
        Self { gemini }
    }

    /// Produce an assistant reply for the conversation
    pub async fn respond(
        &self,
        messages: &[ChatMessage],
        trail: Option<&Trail>,
        weather: Option<&Weather>,
        suitability: Option<&HikingSuitability>,
    ) -> String {
        let question = messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        if let Some(gemini) = &self.gemini {
            match self
                .generate_reply(gemini, messages, trail, weather, suitability)
                .await
            {
                Ok(reply) => return reply,
                Err(e) => {
                    tracing::warn!("Assistant API failed, using rule-based reply: {}", e);
                }
            }
        }

        rule_based_reply(question, trail, weather, suitability)
    }

    async fn generate_reply(
        &self,
        gemini: &GeminiClient,
        messages: &[ChatMessage],
        trail: Option<&Trail>,
        weather: Option<&Weather>,
        suitability: Option<&HikingSuitability>,
    ) -> AppResult<String> {
        let system = build_system_context(trail, weather, suitability);
        let question = messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();

        let history: Vec<Content> = messages
            .iter()
            .take(messages.len().saturating_sub(1))
            .map(|m| match m.role {
                ChatRole::User => Content::user(m.content.clone()),
                ChatRole::Assistant => Content::model(m.content.clone()),
            })
            .collect();

        let mut contents = Vec::with_capacity(history.len() + 3);
        if history.is_empty() {
            // First turn: fold the context into the prompt itself
            contents.push(Content::user(format!(
                "{}\n\nUser question: {}\n\nPlease provide a helpful, friendly response about hiking in Singapore.",
                system, question
            )));
        } else {
            contents.push(Content::user(format!("System context: {}", system)));
            contents.push(Content::model(
                "I understand. I'm a helpful hiking assistant for Singapore trails. How can I assist you today?",
            ));
            contents.extend(history);
            contents.push(Content::user(question));
        }

        gemini.generate(contents).await
    }
}

/// Build the assistant system context from the available state
pub fn build_system_context(
    trail: Option<&Trail>,
    weather: Option<&Weather>,
    suitability: Option<&HikingSuitability>,
) -> String {
    let mut context = format!(
        "You are a friendly and knowledgeable hiking assistant specializing in \
Singapore trails. You help users find trails, prepare for hikes, and stay \
safe outdoors. Be conversational, helpful, and safety-focused.\n\n{}",
        TRAIL_KNOWLEDGE
    );

    if let Some(trail) = trail {
        let facilities: Vec<&str> = [
            (trail.facilities.parking, "parking"),
            (trail.facilities.toilets, "toilets"),
            (trail.facilities.water_points, "water points"),
            (trail.facilities.campsites, "campsites"),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, label)| *label)
        .collect();

        context.push_str(&format!(
            "\n\n=== CURRENTLY SELECTED TRAIL ===\n\
Trail: {}\n\
Location: {}, {}\n\
Distance: {}km\n\
Elevation gain: {}m\n\
Difficulty: {}\n\
Trail type: {}\n\
Estimated time: {} hours\n\
Facilities: {}\n\
Safety notes: {}\n\
Rating: {}/5 ({} reviews)",
            trail.name,
            trail.location.city,
            trail.location.state,
            trail.stats.distance,
            trail.stats.elevation_gain,
            trail.stats.difficulty.label(),
            trail.stats.trail_type.label(),
            (trail.stats.estimated_time as f64 / 60.0).round(),
            if facilities.is_empty() {
                "Limited facilities".to_string()
            } else {
                facilities.join(", ")
            },
            if trail.safety_notes.is_empty() {
                "Standard precautions apply".to_string()
            } else {
                trail.safety_notes.join("; ")
            },
            trail.rating,
            trail.review_count,
        ));
    }

    if let Some(weather) = weather {
        context.push_str(&format!(
            "\n\n=== CURRENT WEATHER ===\n\
Temperature: {}C (feels like {}C)\n\
Condition: {}\n\
Wind: {}km/h\n\
Humidity: {}%\n\
Rain probability: {}%",
            weather.temperature,
            weather.feels_like,
            weather.condition,
            weather.wind_speed,
            weather.humidity,
            weather.rain_probability,
        ));
    }

    if let Some(suitability) = suitability {
        context.push_str(&format!(
            "\n\n=== HIKING CONDITIONS ===\nStatus: {:?}\nAssessment: {}",
            suitability.status,
            suitability.reasons.join("; "),
        ));
    }

    context.push_str(
        "\n\nGuidelines:\n\
- Always prioritize hiker safety\n\
- Suggest appropriate trails based on fitness level\n\
- Remind users to bring water (Singapore is hot and humid)\n\
- Mention insect repellent and sun protection\n\
- If asked about something outside hiking, politely redirect to hiking topics",
    );

    context
}

/// Keyword-matching responder used when no generative API is available
pub fn rule_based_reply(
    question: &str,
    trail: Option<&Trail>,
    weather: Option<&Weather>,
    suitability: Option<&HikingSuitability>,
) -> String {
    let q = question.to_lowercase();

    if is_greeting(&q) {
        return greeting_reply(trail);
    }

    if q.contains("recommend") || q.contains("suggest") || q.contains("which trail") {
        return recommendation_reply(&q);
    }

    if q.contains("beginner") || q.contains("suitable") || q.contains("fitness") {
        return fitness_reply(trail);
    }

    if q.contains("bring") || q.contains("pack") || q.contains("gear") || q.contains("what should i")
    {
        return packing_reply(trail, weather);
    }

    if q.contains("safe") || q.contains("weather") || q.contains("condition") {
        return conditions_reply(weather, suitability);
    }

    if q.contains("time") || q.contains("how long") || q.contains("duration") {
        return duration_reply(trail);
    }

    default_reply(trail)
}

fn is_greeting(q: &str) -> bool {
    ["hi", "hello", "hey", "good morning", "good afternoon"]
        .iter()
        .any(|greeting| q.starts_with(greeting))
}

fn greeting_reply(trail: Option<&Trail>) -> String {
    let closing = match trail {
        Some(trail) => format!(
            "I see you're looking at **{}**. Would you like to know more about it?",
            trail.name
        ),
        None => "Which trail are you interested in, or would you like some recommendations?"
            .to_string(),
    };

    format!(
        "Hello! I'm your hiking assistant for Singapore trails. I can help you with:\n\n\
- **Trail recommendations** - find the right trail for your fitness level\n\
- **Packing advice** - what to bring on your hike\n\
- **Weather & safety** - current conditions and safety tips\n\
- **Trail information** - details about specific trails\n\n{}",
        closing
    )
}

fn recommendation_reply(q: &str) -> String {
    if q.contains("beginner") || q.contains("easy") {
        return "For beginners, I recommend these Singapore trails:\n\n\
- **Southern Ridges** (10km, easy) - scenic views and the Henderson Waves bridge\n\
- **Fort Canning Park** (2.5km, easy) - short historical trail in the city\n\
- **Labrador Nature Reserve** (2.1km, easy) - coastal walk with WWII history\n\
- **Coney Island Park** (5.5km, easy) - rustic island with beaches and wildlife\n\n\
All are well maintained with clear paths. Start early to avoid the midday heat!"
            .to_string();
    }

    if q.contains("challenge") || q.contains("hard") || q.contains("difficult") {
        return "For a challenge, try these trails:\n\n\
- **Bukit Timah Nature Reserve** (3.2km, moderate) - climb Singapore's highest natural point\n\
- **MacRitchie TreeTop Walk** (11km, moderate) - long trail with the famous suspension bridge\n\
- **Chestnut Nature Park South** (8.2km, moderate) - undulating terrain, great workout\n\n\
Tips: start before 8am to beat the heat, bring at least 2L of water, and take breaks as needed."
            .to_string();
    }

    "Here are my top trail recommendations in Singapore:\n\n\
**For nature lovers:** MacRitchie TreeTop Walk, Sungei Buloh Wetland Reserve\n\
**For scenic views:** Southern Ridges, Labrador Nature Reserve\n\
**For adventure:** Pulau Ubin Chek Jawa, Bukit Timah Nature Reserve\n\n\
What type of experience are you looking for?"
        .to_string()
}

fn fitness_reply(trail: Option<&Trail>) -> String {
    let trail = match trail {
        Some(trail) => trail,
        None => {
            return "I'd be happy to assess a trail's suitability! Please select a trail \
from the list, or tell me which trail you're interested in."
                .to_string()
        }
    };

    match trail.stats.difficulty {
        Difficulty::Easy => format!(
            "Yes! **{}** is perfect for beginners.\n\n\
- Rated as **easy** difficulty\n\
- Distance: {}km\n\
- Elevation gain: only {}m\n\
- Estimated time: about {} hours\n\n\
Tips for your first hike: start before 9am, bring at least 1.5L of water, \
wear shoes with good grip, and apply sunscreen and insect repellent.",
            trail.name,
            trail.stats.distance,
            trail.stats.elevation_gain,
            (trail.stats.estimated_time as f64 / 60.0).round(),
        ),
        Difficulty::Moderate => format!(
            "**{}** is rated **moderate** difficulty.\n\n\
It may be challenging if you're new to hiking, but it's doable with preparation:\n\
- Build stamina with shorter walks first\n\
- Start very early (7-8am) to avoid the heat\n\
- Bring 2L+ of water and take regular breaks\n\n\
Want me to suggest an easier trail to start with?",
            trail.name,
        ),
        Difficulty::Hard => format!(
            "**{}** is rated **hard** - I'd suggest building up to this one first.\n\n\
For beginners, I recommend starting with Fort Canning Park (2.5km, easy), \
Labrador Nature Reserve (2.1km, easy) or the Southern Ridges (10km but very \
manageable). Build your stamina and confidence, then tackle the harder trails!",
            trail.name,
        ),
    }
}

fn packing_reply(trail: Option<&Trail>, weather: Option<&Weather>) -> String {
    let mut reply = "**Essential hiking gear for Singapore:**\n\n\
**Hydration & food:** 1.5-2L of water minimum, energy snacks, a light lunch for hikes over 3 hours\n\
**Protection:** sunscreen SPF50+, insect repellent, hat, sunglasses\n\
**Clothing:** light breathable clothes, hiking shoes with grip, a spare shirt\n\
**Safety:** fully charged phone, first aid kit, offline maps, whistle\n\
**Nice to have:** trekking poles, waterproof bag (sudden rain is common), small towel"
        .to_string();

    if let Some(weather) = weather {
        if weather.rain_probability > 30 {
            reply.push_str(&format!(
                "\n\n**Rain alert:** {}% chance of rain today. Definitely bring a poncho or rain jacket!",
                weather.rain_probability
            ));
        }
    }

    if let Some(trail) = trail {
        if trail.stats.difficulty == Difficulty::Hard {
            reply.push_str(&format!(
                "\n\n**Extra gear for {}:** trekking poles recommended, extra water (2.5L+), more snacks for energy.",
                trail.name
            ));
        }
    }

    reply
}

fn conditions_reply(
    weather: Option<&Weather>,
    suitability: Option<&HikingSuitability>,
) -> String {
    let (weather, suitability) = match (weather, suitability) {
        (Some(weather), Some(suitability)) => (weather, suitability),
        _ => {
            return "Please select a trail first, and I'll check the current weather \
conditions for you!"
                .to_string()
        }
    };

    match suitability.status {
        SuitabilityStatus::Good => format!(
            "**Great news! Conditions are good for hiking today.**\n\n\
Temperature: {}C (feels like {}C)\n\
Condition: {}\n\
Wind: {}km/h\n\
Rain chance: {}%\n\n\
{}\n\n\
Still start early to avoid midday heat, stay hydrated, and take breaks in \
shaded areas. Have a wonderful hike!",
            weather.temperature,
            weather.feels_like,
            weather.condition,
            weather.wind_speed,
            weather.rain_probability,
            suitability.reasons.join("\n"),
        ),
        SuitabilityStatus::Caution => format!(
            "**You can hike today, but use caution.**\n\n\
Temperature: {}C (feels like {}C)\n\
Rain chance: {}%\n\n\
Concerns:\n{}\n\n\
Recommendations: start earlier than usual, bring extra water, have a backup \
plan, monitor weather updates, and turn back if conditions worsen.",
            weather.temperature,
            weather.feels_like,
            weather.rain_probability,
            bulleted(&suitability.reasons),
        ),
        SuitabilityStatus::Unsafe => format!(
            "**I'd recommend postponing your hike today.**\n\n\
Current conditions are not ideal:\n{}\n\n\
Alternatives: check the forecast for better days this week, consider indoor \
activities, or plan for early morning if you must go. Safety first - the \
trails will be there when conditions improve.",
            bulleted(&suitability.reasons),
        ),
    }
}

fn duration_reply(trail: Option<&Trail>) -> String {
    match trail {
        Some(trail) => format!(
            "**{}** takes approximately **{} hours** to complete.\n\n\
Distance: {}km\n\
Elevation: {}m gain\n\
Difficulty: {}\n\n\
Time varies with fitness level, photo stops and rest breaks. Add a 30-60 \
minute buffer if you're new to hiking, and always start early in Singapore's heat!",
            trail.name,
            (trail.stats.estimated_time as f64 / 60.0).round(),
            trail.stats.distance,
            trail.stats.elevation_gain,
            trail.stats.difficulty.label(),
        ),
        None => "Select a trail and I'll tell you the estimated duration!".to_string(),
    }
}

fn default_reply(trail: Option<&Trail>) -> String {
    let closing = match trail {
        Some(trail) => format!(
            "You're currently viewing **{}**. Ask me anything about it!",
            trail.name
        ),
        None => "Select a trail from the list or ask me for recommendations!".to_string(),
    };

    format!(
        "I'm here to help with your Singapore hiking adventures!\n\n\
**I can help you with:**\n\n\
- **Trail recommendations** - \"Recommend a trail for beginners\"\n\
- **Packing advice** - \"What should I bring?\"\n\
- **Weather & safety** - \"Is it safe to hike today?\"\n\
- **Trail information** - \"How long is Southern Ridges?\"\n\n{}",
        closing
    )
}

fn bulleted(reasons: &[String]) -> String {
    reasons
        .iter()
        .map(|reason| format!("- {}", reason))
        .collect::<Vec<_>>()
        .join("\n")
}
