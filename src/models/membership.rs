use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Membership length. The backend only accepts 6, 12 or 24 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum MembershipDuration {
    #[default]
    SixMonths,
    OneYear,
    TwoYears,
}

impl MembershipDuration {
    pub fn months(&self) -> u8 {
        match self {
            MembershipDuration::SixMonths => 6,
            MembershipDuration::OneYear => 12,
            MembershipDuration::TwoYears => 24,
        }
    }
}

impl TryFrom<u8> for MembershipDuration {
    type Error = String;

    fn try_from(months: u8) -> Result<Self, Self::Error> {
        match months {
            6 => Ok(MembershipDuration::SixMonths),
            12 => Ok(MembershipDuration::OneYear),
            24 => Ok(MembershipDuration::TwoYears),
            other => Err(format!(
                "Membership duration must be 6, 12 or 24 months (got {})",
                other
            )),
        }
    }
}

impl From<MembershipDuration> for u8 {
    fn from(d: MembershipDuration) -> Self {
        d.months()
    }
}

impl fmt::Display for MembershipDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.months())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MembershipAction {
    #[default]
    Extend,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMembership {
    pub member_name: String,
    pub duration_months: MembershipDuration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipUpdate {
    pub membership_number: String,
    pub action: MembershipAction,
    pub extension_months: MembershipDuration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MembershipCreated {
    pub message: String,
    pub membership_number: String,
}

/// A row of `/maintenance/memberships`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub name: String,
    pub membership_number: String,
    /// e.g. `6_months`
    #[serde(rename = "type")]
    pub membership_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
}
