use std::fmt::Display;

pub type RecordId = u64;
pub type Age = u32;

/// Field values for a record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub age: Age,
}

impl NewRecord {
    pub fn new(name: String, surname: String, phone: String, age: Age) -> Self {
        NewRecord {
            name,
            surname,
            phone,
            age,
        }
    }
}

/// Replacement values for the editable fields. Age and id are never editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub name: String,
    pub surname: String,
    pub phone: String,
}

impl RecordUpdate {
    pub fn new(name: String, surname: String, phone: String) -> Self {
        RecordUpdate {
            name,
            surname,
            phone,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Record {
    pub id: RecordId,
    name: String,
    surname: String,
    phone: String,
    age: Age,
}

impl Record {
    pub(crate) fn new(id: RecordId, fields: NewRecord) -> Record {
        Record {
            id,
            name: fields.name,
            surname: fields.surname,
            phone: fields.phone,
            age: fields.age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn age(&self) -> Age {
        self.age
    }

    /// Case-sensitive substring match on name or surname.
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.surname.contains(query)
    }

    pub(crate) fn apply(&mut self, update: RecordUpdate) {
        self.name = update.name;
        self.surname = update.surname;
        self.phone = update.phone;
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Insured person: {} {}, phone: {}, age: {}, ID-{}",
            self.name, self.surname, self.phone, self.age, self.id
        )
    }
}
