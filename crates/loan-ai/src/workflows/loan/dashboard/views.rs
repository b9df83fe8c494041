use serde::Serialize;

/// Three-colour summary indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLight {
    Green,
    Yellow,
    Red,
}

impl TrafficLight {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrafficLights {
    pub risk: TrafficLight,
    pub affordability: TrafficLight,
    pub compliance: TrafficLight,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeValue {
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncomeBreakdown {
    pub income: f64,
    pub expenses: f64,
    pub debt: f64,
}

/// DTI recomputed with existing debt reduced by 10, 20 and 30 percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DtiSimulation {
    pub current: f64,
    pub minus10: f64,
    pub minus20: f64,
    pub minus30: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffordabilityPair {
    pub installment: f64,
    pub free_income: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CreditScorePoint {
    pub score: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioPoint {
    pub ratio: f64,
}

/// Chart-ready series consumed by the dashboard frontend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub risk_gauge: GaugeValue,
    pub income_vs_expenses: IncomeBreakdown,
    pub dti_simulation: DtiSimulation,
    pub affordability: AffordabilityPair,
    pub credit_score: CreditScorePoint,
    pub loan_to_income: RatioPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub dti: f64,
    pub monthly_free: f64,
    pub expense_ratio: f64,
    pub estimated_installment: f64,
    pub installment_to_free_income: f64,
    pub loan_to_income_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub charts: DashboardCharts,
    pub metrics: DashboardMetrics,
    pub traffic_lights: TrafficLights,
}
