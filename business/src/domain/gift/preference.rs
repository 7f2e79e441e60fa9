use serde::{Deserialize, Serialize};

use super::errors::GiftError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    Girlfriend,
    Boyfriend,
    Wife,
    Husband,
    Partner,
    Friend,
}

impl RecipientType {
    pub const ALL: [RecipientType; 6] = [
        RecipientType::Girlfriend,
        RecipientType::Boyfriend,
        RecipientType::Wife,
        RecipientType::Husband,
        RecipientType::Partner,
        RecipientType::Friend,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecipientType::Girlfriend => "Girlfriend",
            RecipientType::Boyfriend => "Boyfriend",
            RecipientType::Wife => "Wife",
            RecipientType::Husband => "Husband",
            RecipientType::Partner => "Partner",
            RecipientType::Friend => "Friend",
        }
    }
}

impl std::fmt::Display for RecipientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipientType::Girlfriend => write!(f, "girlfriend"),
            RecipientType::Boyfriend => write!(f, "boyfriend"),
            RecipientType::Wife => write!(f, "wife"),
            RecipientType::Husband => write!(f, "husband"),
            RecipientType::Partner => write!(f, "partner"),
            RecipientType::Friend => write!(f, "friend"),
        }
    }
}

impl std::str::FromStr for RecipientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "girlfriend" => Ok(RecipientType::Girlfriend),
            "boyfriend" => Ok(RecipientType::Boyfriend),
            "wife" => Ok(RecipientType::Wife),
            "husband" => Ok(RecipientType::Husband),
            "partner" => Ok(RecipientType::Partner),
            "friend" => Ok(RecipientType::Friend),
            _ => Err(format!("Invalid recipient type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Birthday,
    Anniversary,
    ValentinesDay,
    Diwali,
    Wedding,
    JustBecause,
    Apology,
}

impl Occasion {
    pub const ALL: [Occasion; 7] = [
        Occasion::Birthday,
        Occasion::Anniversary,
        Occasion::ValentinesDay,
        Occasion::Diwali,
        Occasion::Wedding,
        Occasion::JustBecause,
        Occasion::Apology,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Occasion::Birthday => "Birthday",
            Occasion::Anniversary => "Anniversary",
            Occasion::ValentinesDay => "Valentine's Day",
            Occasion::Diwali => "Diwali",
            Occasion::Wedding => "Wedding",
            Occasion::JustBecause => "Just Because",
            Occasion::Apology => "Apology",
        }
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Occasion::Birthday => write!(f, "birthday"),
            Occasion::Anniversary => write!(f, "anniversary"),
            Occasion::ValentinesDay => write!(f, "valentines_day"),
            Occasion::Diwali => write!(f, "diwali"),
            Occasion::Wedding => write!(f, "wedding"),
            Occasion::JustBecause => write!(f, "just_because"),
            Occasion::Apology => write!(f, "apology"),
        }
    }
}

impl std::str::FromStr for Occasion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "birthday" => Ok(Occasion::Birthday),
            "anniversary" => Ok(Occasion::Anniversary),
            "valentines_day" => Ok(Occasion::ValentinesDay),
            "diwali" => Ok(Occasion::Diwali),
            "wedding" => Ok(Occasion::Wedding),
            "just_because" => Ok(Occasion::JustBecause),
            "apology" => Ok(Occasion::Apology),
            _ => Err(format!("Invalid occasion: {}", s)),
        }
    }
}

/// Budget brackets in Indian Rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Under500,
    From500To2000,
    From2000To5000,
    From5000To15000,
    Above15000,
}

impl Budget {
    pub const ALL: [Budget; 5] = [
        Budget::Under500,
        Budget::From500To2000,
        Budget::From2000To5000,
        Budget::From5000To15000,
        Budget::Above15000,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Budget::Under500 => "Under ₹500",
            Budget::From500To2000 => "₹500 - ₹2000",
            Budget::From2000To5000 => "₹2000 - ₹5000",
            Budget::From5000To15000 => "₹5000 - ₹15000",
            Budget::Above15000 => "₹15000+",
        }
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Budget::Under500 => write!(f, "under_500"),
            Budget::From500To2000 => write!(f, "500_2000"),
            Budget::From2000To5000 => write!(f, "2000_5000"),
            Budget::From5000To15000 => write!(f, "5000_15000"),
            Budget::Above15000 => write!(f, "above_15000"),
        }
    }
}

impl std::str::FromStr for Budget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under_500" => Ok(Budget::Under500),
            "500_2000" => Ok(Budget::From500To2000),
            "2000_5000" => Ok(Budget::From2000To5000),
            "5000_15000" => Ok(Budget::From5000To15000),
            "above_15000" => Ok(Budget::Above15000),
            _ => Err(format!("Invalid budget: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vibe {
    Romantic,
    Practical,
    Funny,
    Sentimental,
    Luxurious,
    Creative,
}

impl Vibe {
    pub const ALL: [Vibe; 6] = [
        Vibe::Romantic,
        Vibe::Practical,
        Vibe::Funny,
        Vibe::Sentimental,
        Vibe::Luxurious,
        Vibe::Creative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Vibe::Romantic => "Romantic",
            Vibe::Practical => "Practical",
            Vibe::Funny => "Funny",
            Vibe::Sentimental => "Sentimental",
            Vibe::Luxurious => "Luxurious",
            Vibe::Creative => "Creative",
        }
    }
}

impl std::fmt::Display for Vibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vibe::Romantic => write!(f, "romantic"),
            Vibe::Practical => write!(f, "practical"),
            Vibe::Funny => write!(f, "funny"),
            Vibe::Sentimental => write!(f, "sentimental"),
            Vibe::Luxurious => write!(f, "luxurious"),
            Vibe::Creative => write!(f, "creative"),
        }
    }
}

impl std::str::FromStr for Vibe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "romantic" => Ok(Vibe::Romantic),
            "practical" => Ok(Vibe::Practical),
            "funny" => Ok(Vibe::Funny),
            "sentimental" => Ok(Vibe::Sentimental),
            "luxurious" => Ok(Vibe::Luxurious),
            "creative" => Ok(Vibe::Creative),
            _ => Err(format!("Invalid vibe: {}", s)),
        }
    }
}

/// What the user told us about the person they are shopping for.
///
/// The four choice fields are populated by construction; only `interests`
/// is free text and must carry something besides whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    pub recipient_type: RecipientType,
    pub occasion: Occasion,
    pub interests: String,
    pub budget: Budget,
    pub vibe: Vibe,
}

impl Preference {
    pub fn new(
        recipient_type: RecipientType,
        occasion: Occasion,
        interests: String,
        budget: Budget,
        vibe: Vibe,
    ) -> Result<Self, GiftError> {
        let interests = interests.trim();
        if interests.is_empty() {
            return Err(GiftError::InterestsEmpty);
        }

        Ok(Self {
            recipient_type,
            occasion,
            interests: interests.to_string(),
            budget,
            vibe,
        })
    }
}

/// A selectable value as the form shows it: wire code plus human label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub code: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceOptions {
    pub recipient_types: Vec<ChoiceOption>,
    pub occasions: Vec<ChoiceOption>,
    pub budgets: Vec<ChoiceOption>,
    pub vibes: Vec<ChoiceOption>,
}

fn choices<T: std::fmt::Display>(values: &[T], label: fn(&T) -> &'static str) -> Vec<ChoiceOption> {
    values
        .iter()
        .map(|value| ChoiceOption {
            code: value.to_string(),
            label: label(value),
        })
        .collect()
}

/// Every choice set in form order. The first entry of each is the form default.
pub fn options() -> PreferenceOptions {
    PreferenceOptions {
        recipient_types: choices(&RecipientType::ALL, RecipientType::label),
        occasions: choices(&Occasion::ALL, Occasion::label),
        budgets: choices(&Budget::ALL, Budget::label),
        vibes: choices(&Vibe::ALL, Vibe::label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_preference_when_interests_present() {
        let result = Preference::new(
            RecipientType::Wife,
            Occasion::Anniversary,
            "  filter coffee, trekking ".to_string(),
            Budget::From2000To5000,
            Vibe::Romantic,
        );

        assert!(result.is_ok());
        let preference = result.unwrap();
        assert_eq!(preference.interests, "filter coffee, trekking");
        assert_eq!(preference.budget.label(), "₹2000 - ₹5000");
    }

    #[test]
    fn should_reject_when_interests_empty() {
        let result = Preference::new(
            RecipientType::Friend,
            Occasion::Birthday,
            "".to_string(),
            Budget::Under500,
            Vibe::Funny,
        );

        assert!(matches!(result.unwrap_err(), GiftError::InterestsEmpty));
    }

    #[test]
    fn should_reject_when_interests_only_whitespace() {
        let result = Preference::new(
            RecipientType::Friend,
            Occasion::Birthday,
            " \n\t ".to_string(),
            Budget::Under500,
            Vibe::Funny,
        );

        assert!(matches!(result.unwrap_err(), GiftError::InterestsEmpty));
    }

    #[test]
    fn should_parse_budget_bracket_code() {
        let budget: Budget = "2000_5000".parse().unwrap();

        assert_eq!(budget, Budget::From2000To5000);
    }

    #[test]
    fn should_reject_unknown_vibe_code() {
        let result = "grumpy".parse::<Vibe>();

        assert_eq!(result.unwrap_err(), "Invalid vibe: grumpy");
    }

    #[test]
    fn should_use_human_label_for_valentines_day() {
        assert_eq!(Occasion::ValentinesDay.label(), "Valentine's Day");
        assert_eq!(Occasion::ValentinesDay.to_string(), "valentines_day");
    }

    #[test]
    fn should_list_every_choice_in_form_order() {
        let options = options();

        assert_eq!(options.recipient_types.len(), 6);
        assert_eq!(options.occasions.len(), 7);
        assert_eq!(options.budgets.len(), 5);
        assert_eq!(options.vibes.len(), 6);
        assert_eq!(
            options.budgets[2],
            ChoiceOption {
                code: "2000_5000".to_string(),
                label: "₹2000 - ₹5000",
            }
        );
        assert_eq!(options.occasions[2].code, "valentines_day");
    }
}
