use super::{DeletePolicy, Resource};
use crate::service::RequestValidator;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Room the student lives in. Nothing assigns it yet.
    pub room_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewStudent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default)]
pub struct StudentFilter;

impl Resource for Student {
    type Draft = NewStudent;
    type Patch = StudentPatch;
    type Filter = StudentFilter;

    const KIND: &'static str = "Student";
    const COLLECTION: &'static str = "students";
    const SERVICE: &'static str = "student-service";
    const REQUIRED: &'static str = "name and email are required";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Remove;

    fn id(&self) -> i64 {
        self.id
    }

    fn is_complete(draft: &NewStudent) -> bool {
        RequestValidator::has_text(&draft.name) && RequestValidator::has_text(&draft.email)
    }

    fn build(id: i64, draft: NewStudent) -> Self {
        Student {
            id,
            name: draft.name.unwrap_or_default(),
            email: draft.email.unwrap_or_default(),
            phone: draft.phone.unwrap_or_default(),
            room_id: None,
        }
    }

    fn apply(&mut self, patch: StudentPatch) {
        RequestValidator::apply_text(&mut self.name, patch.name);
        RequestValidator::apply_text(&mut self.email, patch.email);
        RequestValidator::apply_text(&mut self.phone, patch.phone);
    }

    fn seed() -> (Vec<Self>, i64) {
        let seeded = vec![
            Student {
                id: 1,
                name: "Alice Smith".into(),
                email: "alice@example.com".into(),
                phone: "555-0101".into(),
                room_id: None,
            },
            Student {
                id: 2,
                name: "Bob Jones".into(),
                email: "bob@example.com".into(),
                phone: "555-0102".into(),
                room_id: None,
            },
        ];
        (seeded, 3)
    }
}
