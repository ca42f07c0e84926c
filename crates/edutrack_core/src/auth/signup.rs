//! Signup form shapes for the student and teacher portals.
//!
//! Only required-field presence is enforced. E-mail and phone syntax are not
//! checked because no account is ever created.

use super::{require_text, AuthError};
use crate::model::role::Role;
use serde::{Deserialize, Serialize};

/// Study year offered on the student form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyYear {
    First,
    Second,
    Third,
    Fourth,
}

impl StudyYear {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "1st" => Some(Self::First),
            "2nd" => Some(Self::Second),
            "3rd" => Some(Self::Third),
            "4th" => Some(Self::Fourth),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::First => "1st Year",
            Self::Second => "2nd Year",
            Self::Third => "3rd Year",
            Self::Fourth => "4th Year",
        }
    }
}

/// Academic department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Csit,
    Csd,
    Ece,
    Me,
    Ce,
    Ee,
}

impl Department {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "csit" => Some(Self::Csit),
            "csd" => Some(Self::Csd),
            "ece" => Some(Self::Ece),
            "me" => Some(Self::Me),
            "ce" => Some(Self::Ce),
            "ee" => Some(Self::Ee),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csit => "csit",
            Self::Csd => "csd",
            Self::Ece => "ece",
            Self::Me => "me",
            Self::Ce => "ce",
            Self::Ee => "ee",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Csit => "Computer Science & IT",
            Self::Csd => "Computer Science & Design",
            Self::Ece => "Electronics & Communication",
            Self::Me => "Mechanical Engineering",
            Self::Ce => "Civil Engineering",
            Self::Ee => "Electrical Engineering",
        }
    }

    /// Students pick from the first four departments; teachers from all six.
    pub fn offered_to(self, role: Role) -> bool {
        match role {
            Role::Student => matches!(self, Self::Csit | Self::Csd | Self::Ece | Self::Me),
            Role::Teacher => true,
            Role::Admin => false,
        }
    }
}

/// Class section on the student form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    A,
    B,
    C,
}

impl Section {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            _ => None,
        }
    }
}

/// Teacher designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Designation {
    Hod,
    Professor,
    AssistantProfessor,
    LabAssistant,
}

impl Designation {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hod" => Some(Self::Hod),
            "professor" => Some(Self::Professor),
            "assistant-professor" => Some(Self::AssistantProfessor),
            "lab-assistant" => Some(Self::LabAssistant),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hod => "Head of Department",
            Self::Professor => "Professor",
            Self::AssistantProfessor => "Assistant Professor",
            Self::LabAssistant => "Lab Assistant",
        }
    }
}

/// Student "Sign Up" tab. `None` selects mean "nothing chosen yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSignup {
    pub full_name: String,
    pub registration_number: String,
    pub year: Option<StudyYear>,
    pub department: Option<Department>,
    pub section: Option<Section>,
    pub email: String,
    pub mobile: String,
}

/// Teacher "Sign Up" tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSignup {
    pub full_name: String,
    pub teacher_id: String,
    pub department: Option<Department>,
    pub designation: Option<Designation>,
    pub email: String,
    pub mobile: String,
}

/// Signup submission for either portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "role")]
pub enum SignupForm {
    Student(StudentSignup),
    Teacher(TeacherSignup),
}

impl SignupForm {
    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Teacher(_) => Role::Teacher,
        }
    }

    /// Checks required fields in on-screen order.
    ///
    /// # Errors
    /// - `MissingField` for the first empty text field or unselected option.
    /// - `UnsupportedOption` when the department is not offered to the role.
    pub fn check_required(&self) -> Result<(), AuthError> {
        match self {
            Self::Student(form) => {
                require_text("full_name", &form.full_name)?;
                require_text("registration_number", &form.registration_number)?;
                require_option("year", form.year)?;
                let department = require_option("department", form.department)?;
                check_department(department, Role::Student)?;
                require_option("section", form.section)?;
                require_text("email", &form.email)?;
                require_text("mobile", &form.mobile)
            }
            Self::Teacher(form) => {
                require_text("full_name", &form.full_name)?;
                require_text("teacher_id", &form.teacher_id)?;
                let department = require_option("department", form.department)?;
                check_department(department, Role::Teacher)?;
                require_option("designation", form.designation)?;
                require_text("email", &form.email)?;
                require_text("mobile", &form.mobile)
            }
        }
    }
}

fn require_option<T>(field: &'static str, value: Option<T>) -> Result<T, AuthError> {
    value.ok_or(AuthError::MissingField(field))
}

fn check_department(department: Department, role: Role) -> Result<(), AuthError> {
    if department.offered_to(role) {
        return Ok(());
    }
    Err(AuthError::UnsupportedOption {
        field: "department",
        value: department.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{Department, Designation, SignupForm, StudentSignup, StudyYear};
    use crate::auth::AuthError;

    #[test]
    fn reports_first_missing_field_in_screen_order() {
        let form = SignupForm::Student(StudentSignup {
            full_name: "Alex Smith".to_string(),
            ..StudentSignup::default()
        });
        assert_eq!(
            form.check_required(),
            Err(AuthError::MissingField("registration_number"))
        );
    }

    #[test]
    fn student_cannot_pick_teacher_only_department() {
        let form = SignupForm::Student(StudentSignup {
            full_name: "Alex Smith".to_string(),
            registration_number: "CS2024001".to_string(),
            year: Some(StudyYear::Fourth),
            department: Some(Department::Ce),
            ..StudentSignup::default()
        });
        assert!(matches!(
            form.check_required(),
            Err(AuthError::UnsupportedOption { field: "department", .. })
        ));
    }

    #[test]
    fn parses_select_values() {
        assert_eq!(StudyYear::parse("2nd"), Some(StudyYear::Second));
        assert_eq!(Department::parse("ece"), Some(Department::Ece));
        assert_eq!(Department::parse("ECE"), None);
    }

    #[test]
    fn select_options_have_display_labels() {
        assert_eq!(StudyYear::Third.label(), "3rd Year");
        assert_eq!(Department::Csd.label(), "Computer Science & Design");
        assert_eq!(
            Designation::parse("assistant-professor").map(Designation::label),
            Some("Assistant Professor")
        );
        assert_eq!(Designation::Hod.label(), "Head of Department");
    }
}
