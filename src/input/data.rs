//! Wizard input data structures matching the simulator's JSON format

use serde::{Deserialize, Serialize};

/// Treat an absent numeric field as zero
#[inline]
fn amount(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Sum starting from +0.0; `Iterator::sum` of an empty f64 iterator is -0.0
fn total<I: Iterator<Item = f64>>(values: I) -> f64 {
    values.fold(0.0, |acc, x| acc + x)
}

/// A recurring revenue source (tuition, subsidies, fees, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSource {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub source_name: String,

    /// Monthly amount in dollars (null while the field is blank)
    #[serde(default)]
    pub monthly_amount: Option<f64>,

    #[serde(default)]
    pub tag: String,
}

impl RevenueSource {
    pub fn new(id: &str, source_name: &str, monthly_amount: f64) -> Self {
        Self {
            id: id.to_string(),
            source_name: source_name.to_string(),
            monthly_amount: Some(monthly_amount),
            tag: String::new(),
        }
    }

    pub fn monthly(&self) -> f64 {
        amount(self.monthly_amount)
    }
}

/// A single line in one of the expense categories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub expense_name: String,

    #[serde(default)]
    pub monthly_amount: Option<f64>,

    /// Billing cadence label, e.g. "Monthly"
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Only meaningful for employee rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_month: Option<f64>,
}

impl ExpenseItem {
    pub fn new(id: &str, expense_name: &str, monthly_amount: f64) -> Self {
        Self {
            id: id.to_string(),
            expense_name: expense_name.to_string(),
            monthly_amount: Some(monthly_amount),
            kind: "Monthly".to_string(),
            hours_per_month: None,
        }
    }

    pub fn monthly(&self) -> f64 {
        amount(self.monthly_amount)
    }
}

/// A classroom with its licensed capacity and average enrollment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub capacity: Option<f64>,

    /// Staff-to-child ratio
    #[serde(default)]
    pub ratio: Option<f64>,

    #[serde(default)]
    pub avg_students: Option<f64>,
}

impl Classroom {
    pub fn new(id: &str, name: &str, capacity: f64, avg_students: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            capacity: Some(capacity),
            ratio: None,
            avg_students: Some(avg_students),
        }
    }
}

/// A user goal such as "Increase Revenue" with a target percentage change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessGoal {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub goal: String,

    #[serde(default)]
    pub target_percentage: Option<f64>,
}

impl BusinessGoal {
    pub fn new(id: &str, goal: &str, target_percentage: f64) -> Self {
        Self {
            id: id.to_string(),
            goal: goal.to_string(),
            target_percentage: Some(target_percentage),
        }
    }
}

/// Expense categories in the order the wizard presents them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Employees,
    Facilities,
    Administrative,
    Supplies,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Employees,
        ExpenseCategory::Facilities,
        ExpenseCategory::Administrative,
        ExpenseCategory::Supplies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Employees => "employees",
            ExpenseCategory::Facilities => "facilities",
            ExpenseCategory::Administrative => "administrative",
            ExpenseCategory::Supplies => "supplies",
        }
    }
}

/// Snapshot of everything the user entered in the wizard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInput {
    #[serde(default)]
    pub business_name: String,

    #[serde(default)]
    pub revenue_sources: Vec<RevenueSource>,

    #[serde(default)]
    pub employees: Vec<ExpenseItem>,

    #[serde(default)]
    pub facilities: Vec<ExpenseItem>,

    #[serde(default)]
    pub administrative: Vec<ExpenseItem>,

    #[serde(default)]
    pub supplies: Vec<ExpenseItem>,

    #[serde(default)]
    pub classrooms: Vec<Classroom>,

    /// Carried through to the backend, not used by the projection
    #[serde(default)]
    pub operating_hours: Option<f64>,

    #[serde(default)]
    pub operating_days: Option<f64>,

    #[serde(default)]
    pub goals: Vec<BusinessGoal>,
}

impl FinancialInput {
    /// Items of one expense category
    pub fn expenses(&self, category: ExpenseCategory) -> &[ExpenseItem] {
        match category {
            ExpenseCategory::Employees => &self.employees,
            ExpenseCategory::Facilities => &self.facilities,
            ExpenseCategory::Administrative => &self.administrative,
            ExpenseCategory::Supplies => &self.supplies,
        }
    }

    /// All expense items across the four categories, in category order
    pub fn all_expenses(&self) -> impl Iterator<Item = &ExpenseItem> {
        ExpenseCategory::ALL
            .into_iter()
            .flat_map(move |c| self.expenses(c).iter())
    }

    pub fn monthly_revenue(&self) -> f64 {
        total(self.revenue_sources.iter().map(RevenueSource::monthly))
    }

    pub fn monthly_expenses(&self) -> f64 {
        total(self.all_expenses().map(ExpenseItem::monthly))
    }

    pub fn category_monthly_expenses(&self, category: ExpenseCategory) -> f64 {
        total(self.expenses(category).iter().map(ExpenseItem::monthly))
    }

    pub fn total_capacity(&self) -> f64 {
        total(self.classrooms.iter().map(|c| amount(c.capacity)))
    }

    pub fn total_students(&self) -> f64 {
        total(self.classrooms.iter().map(|c| amount(c.avg_students)))
    }

    /// Enrolled students as a percentage of capacity, 0 when there is no capacity
    pub fn utilization_pct(&self) -> f64 {
        let capacity = self.total_capacity();
        if capacity > 0.0 {
            self.total_students() / capacity * 100.0
        } else {
            0.0
        }
    }
}
