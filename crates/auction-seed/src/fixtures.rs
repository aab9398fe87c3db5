//! Fixed users inserted at provisioning time.

use uuid::{Uuid, uuid};

use crate::models::UserDocument;

/// A user written by the seeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedUser {
    pub id: Uuid,
    pub name: &'static str,
}

impl SeedUser {
    /// Converts to the stored document. The id is rendered hyphenated and lowercase.
    pub fn to_document(&self) -> UserDocument {
        UserDocument {
            id: self.id.hyphenated().to_string(),
            name: self.name.to_string(),
        }
    }
}

pub const SEED_USERS: [SeedUser; 3] = [
    SeedUser {
        id: uuid!("d290f1ee-6c54-4b01-90e6-d701748f0851"),
        name: "Adriano Carvalho Batista",
    },
    SeedUser {
        id: uuid!("93fb1e9c-523f-4d92-80b4-0f7ba12fef56"),
        name: "Wesley Willians",
    },
    SeedUser {
        id: uuid!("93fb1e9c-523f-4d92-80b4-0f7ba12fef57"),
        name: "Sicrano da Silva",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_user_literals() {
        let docs: Vec<_> = SEED_USERS.iter().map(SeedUser::to_document).collect();

        assert_eq!(docs[0].id, "d290f1ee-6c54-4b01-90e6-d701748f0851");
        assert_eq!(docs[0].name, "Adriano Carvalho Batista");
        assert_eq!(docs[1].id, "93fb1e9c-523f-4d92-80b4-0f7ba12fef56");
        assert_eq!(docs[1].name, "Wesley Willians");
        assert_eq!(docs[2].id, "93fb1e9c-523f-4d92-80b4-0f7ba12fef57");
        assert_eq!(docs[2].name, "Sicrano da Silva");
    }

    #[test]
    fn test_seed_user_ids_unique() {
        let ids: std::collections::HashSet<_> = SEED_USERS.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), SEED_USERS.len());
    }
}
