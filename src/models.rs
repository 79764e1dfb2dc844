use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: String,
    pub weight: f64,
    pub daily_calorie_goal: i32,
    pub height_cm: i32,
    pub age: i32,
    pub gender: String,
    pub activity_level: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricType {
    Strength,
    Endurance,
    Speed,
    Flexibility,
    Power,
}

impl MetricType {
    pub fn label(&self) -> &'static str {
        match self {
            MetricType::Strength => "Strength",
            MetricType::Endurance => "Endurance",
            MetricType::Speed => "Speed",
            MetricType::Flexibility => "Flexibility",
            MetricType::Power => "Power",
        }
    }

    pub fn all() -> &'static [MetricType] {
        &[
            MetricType::Strength,
            MetricType::Endurance,
            MetricType::Speed,
            MetricType::Flexibility,
            MetricType::Power,
        ]
    }

    /// Unit domain is constrained by the metric type; the first unit is the
    /// form default.
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            MetricType::Strength => &["kg", "lbs", "reps"],
            MetricType::Endurance => &["km", "miles", "minutes"],
            MetricType::Speed => &["km/h", "mph", "m/s"],
            MetricType::Flexibility => &["cm", "inches", "degrees"],
            MetricType::Power => &["watts", "joules"],
        }
    }

    pub fn parse(value: &str) -> Option<MetricType> {
        MetricType::all().iter().copied().find(|t| t.label() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    pub id: i64,
    pub user_id: i64,
    pub metric_type: MetricType,
    pub value: f64,
    pub unit: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMetricPayload {
    pub user_id: i64,
    pub metric_type: MetricType,
    pub value: f64,
    pub unit: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MealType {
    Breakfast,
    #[serde(rename = "Morning Snack")]
    MorningSnack,
    Lunch,
    #[serde(rename = "Afternoon Snack")]
    AfternoonSnack,
    Dinner,
    #[serde(rename = "Evening Snack")]
    EveningSnack,
    #[serde(rename = "Pre-Workout")]
    PreWorkout,
    #[serde(rename = "Post-Workout")]
    PostWorkout,
    Supplement,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::MorningSnack => "Morning Snack",
            MealType::Lunch => "Lunch",
            MealType::AfternoonSnack => "Afternoon Snack",
            MealType::Dinner => "Dinner",
            MealType::EveningSnack => "Evening Snack",
            MealType::PreWorkout => "Pre-Workout",
            MealType::PostWorkout => "Post-Workout",
            MealType::Supplement => "Supplement",
        }
    }

    pub fn all() -> &'static [MealType] {
        &[
            MealType::Breakfast,
            MealType::MorningSnack,
            MealType::Lunch,
            MealType::AfternoonSnack,
            MealType::Dinner,
            MealType::EveningSnack,
            MealType::PreWorkout,
            MealType::PostWorkout,
            MealType::Supplement,
        ]
    }

    pub fn parse(value: &str) -> Option<MealType> {
        MealType::all().iter().copied().find(|t| t.label() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLog {
    pub id: i64,
    pub user_id: i64,
    pub meal_type: MealType,
    pub food_items: String,
    #[serde(default)]
    pub calories: Option<i32>,
    #[serde(default)]
    pub protein: Option<i32>,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNutritionPayload {
    pub user_id: i64,
    pub meal_type: MealType,
    pub food_items: String,
    pub calories: Option<i32>,
    pub protein: Option<i32>,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzePayload {
    pub food_items: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionFacts {
    pub calories: i32,
    pub protein: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }

    pub fn all() -> &'static [Severity] {
        &[Severity::Mild, Severity::Moderate, Severity::Severe]
    }

    pub fn parse(value: &str) -> Option<Severity> {
        Severity::all().iter().copied().find(|s| s.label() == value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InjuryStatus {
    Active,
    Recovered,
}

impl InjuryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InjuryStatus::Active => "Active",
            InjuryStatus::Recovered => "Recovered",
        }
    }

    pub fn all() -> &'static [InjuryStatus] {
        &[InjuryStatus::Active, InjuryStatus::Recovered]
    }

    pub fn parse(value: &str) -> Option<InjuryStatus> {
        InjuryStatus::all().iter().copied().find(|s| s.label() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Injury {
    pub id: i64,
    pub user_id: i64,
    pub injury_type: String,
    pub body_part: String,
    pub date_occurred: NaiveDate,
    pub severity: Severity,
    pub status: InjuryStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInjuryPayload {
    pub user_id: i64,
    pub injury_type: String,
    pub body_part: String,
    pub date_occurred: NaiveDate,
    pub severity: Severity,
    pub status: InjuryStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Finance {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub amount: f64,
    pub is_income: bool,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFinancePayload {
    pub user_id: i64,
    pub category: String,
    pub amount: f64,
    pub is_income: bool,
    pub date: NaiveDate,
    pub description: Option<String>,
}

pub const INJURY_TYPES: &[&str] = &[
    "Sprain",
    "Strain",
    "Fracture",
    "Dislocation",
    "Tendonitis",
    "Bursitis",
    "Contusion",
    "Laceration",
    "Concussion",
    "Other",
];

pub const BODY_PARTS: &[&str] = &[
    "Ankle",
    "Knee",
    "Hip",
    "Lower Back",
    "Upper Back",
    "Shoulder",
    "Elbow",
    "Wrist",
    "Hand",
    "Neck",
    "Head",
    "Foot",
    "Chest",
    "Abdomen",
    "Other",
];

pub const FINANCE_CATEGORIES: &[&str] = &[
    "Equipment",
    "Nutrition",
    "Training",
    "Medical",
    "Competition",
    "Travel",
    "Coaching",
    "Supplements",
    "Apparel",
    "Membership",
    "Other",
];

pub const FITNESS_LEVELS: &[&str] = &["beginner", "intermediate", "advanced", "elite"];

// AI coach DTOs. The intelligence is server-side; these are wire shapes only.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoachContext {
    pub performance_history: String,
    pub nutrition_logs: String,
    pub injuries: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvicePayload {
    pub question: String,
    pub context: CoachContext,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub advice: String,
    pub suggested_actions: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlanPayload {
    pub level: String,
    pub goals: String,
    pub constraints: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutDay {
    pub focus: String,
    pub exercises: Vec<String>,
    pub duration: String,
    pub intensity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingPlanResponse {
    pub plan: String,
    pub schedule: std::collections::BTreeMap<String, WorkoutDay>,
    pub guidelines: Vec<String>,
}
