//! Fixture types shared by the integration tests: an engine domain with
//! string enums, shape-inferred fields and case-tagged statuses.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use oneof_serde::{cases, tagged_union, tolerant, Alternative, Category, OneOf1, OneOf2, OneOf3};
use serde::{Deserialize, Serialize};

// ============================================================================
// String enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fuel {
    Unknown,
    Petrol,
    Diesel,
    Gas,
    Electricity,
}

impl Alternative for Fuel {
    const CATEGORY: Category = Category::StringOrEnum;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineType {
    InternalCombustion,
    Electric,
}

impl Alternative for EngineType {
    const CATEGORY: Category = Category::StringOrEnum;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PistonAngle {
    NotApplicable,
    #[serde(rename = "_90_Degrees")]
    Degrees90,
    #[serde(rename = "_75_Degrees")]
    Degrees75,
    #[serde(rename = "_60_Degrees")]
    Degrees60,
}

impl Alternative for PistonAngle {
    const CATEGORY: Category = Category::StringOrEnum;
}

// ============================================================================
// Shape-inferred engine details
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimpleEngineDetails {
    #[serde(default, with = "tolerant")]
    pub fuel: Option<OneOf2<i32, Fuel>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Performance {
    pub piston_count: i32,
    #[serde(default, with = "tolerant")]
    pub piston_angle: Option<OneOf3<f64, PistonAngle, i8>>,
    pub horse_power: i32,
    pub torque: i32,
    #[serde(default, with = "tolerant")]
    pub is_sporty: Option<OneOf2<bool, f32>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Notes {
    #[serde(default, with = "tolerant::seq")]
    pub strong_points_list: Option<Vec<OneOf1<String>>>,
    #[serde(default, with = "tolerant")]
    pub weak_points: Option<OneOf1<String>>,
}

impl Alternative for Notes {
    const CATEGORY: Category = Category::Object;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComplexEngineDetails {
    pub code_name: Option<String>,
    #[serde(default, with = "tolerant")]
    pub release_date: Option<OneOf1<DateTime<Utc>>>,
    #[serde(rename = "Type", default, with = "tolerant")]
    pub engine_type: Option<OneOf2<i16, EngineType>>,
    #[serde(default, with = "tolerant::seq")]
    pub fuel: Option<Vec<OneOf2<i32, Fuel>>>,
    pub performance: Option<Performance>,
    #[serde(default, with = "tolerant")]
    pub notes: Option<OneOf2<String, Notes>>,
}

// ============================================================================
// Case-tagged statuses and engines
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idle {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Started {
    pub readiness: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stopped {
    pub previous_statuses: Vec<Status>,
}

cases!(Idle, Started, Stopped);

tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum Status {
        Idle(Idle),
        Started(Started),
        Stopped(Stopped),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Power {
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Reason {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkingEngine {
    pub status: Status,
    pub power: Power,
    pub historical_issues: Vec<String>,
}

impl WorkingEngine {
    pub fn new(power: i32) -> Self {
        Self {
            status: Idle {}.into(),
            power: Power { value: power },
            historical_issues: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrokenEngine {
    pub reason: Reason,
    #[serde(default)]
    pub previous_statuses: Vec<Status>,
}

impl BrokenEngine {
    /// A broken engine inherits the history of a stopped one.
    pub fn from_working(engine: &WorkingEngine, reason: &str) -> Self {
        let previous_statuses = match &engine.status {
            Status::Stopped(stopped) => stopped.previous_statuses.clone(),
            _ => Vec::new(),
        };
        Self {
            reason: Reason {
                value: reason.to_string(),
            },
            previous_statuses,
        }
    }
}

cases!(WorkingEngine, BrokenEngine);

tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum Engine {
        WorkingEngine(WorkingEngine),
        BrokenEngine(BrokenEngine),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Engines {
    pub engine_list: Vec<Engine>,
}

// ============================================================================
// Field-less cases
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waiting {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completed {}

cases!(Waiting, Running, Completed);

tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum JobStatus {
        Waiting(Waiting),
        Running(Running),
        Completed(Completed),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Job {
    pub status: JobStatus,
}

impl Job {
    pub fn new() -> Self {
        Self {
            status: Waiting {}.into(),
        }
    }

    pub fn run(&mut self) {
        self.status = Running {}.into();
    }

    pub fn done(&mut self) {
        self.status = Completed {}.into();
    }
}

// ============================================================================
// A union mixing bare text with a real case
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessStrangeCase {}

cases!(LessStrangeCase);

tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum SomeStrangeType {
        Text(String),
        LessStrangeCase(LessStrangeCase),
    }
}
