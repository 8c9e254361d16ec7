use insured_store::record::Record;

pub const MENU: &str = "Select an action:
1 - Add a new insured person
2 - List all insured individuals
3 - Search for an insured person
4 - Modify an insured person
5 - Delete an insured person
6 - Create a file
7 - End";

pub const INVALID_NUMBER: &str = "Invalid number. Please enter number.";
pub const MENU_RANGE: &str = "Enter number from 1 to 7";
pub const GOODBYE: &str = "Goodbye";

pub const ONLY_LETTERS: &str = "You must enter only letters of the alphabet";
pub const PHONE_PROMPT: &str = "Enter the phone number (9 digits without the area code):";
pub const PHONE_NOT_DIGITS: &str =
    "The phone number cannot contain letters or special characters and must be 9-digit number";
pub const PHONE_LENGTH: &str = "Enter a 9-digit number";
pub const AGE_PROMPT: &str = "Enter the age:";
pub const AGE_RANGE: &str = "The age must be in the range of 0-150";
pub const RECORD_ADDED: &str = "A new insured person has been successfully added.";

pub const NO_RECORDS: &str = "No insured individuals are recorded in the database";

pub const SEARCH_PROMPT: &str = "Enter the name or surname:";
pub const NAME_NOT_FOUND: &str = "This name is not recorded in the database";

pub const EDIT_ID_PROMPT: &str = "Enter the ID of the person you are looking for:";
pub const EDIT_NOT_FOUND: &str = "The database does not contain the ID you entered";

pub const DELETE_ID_PROMPT: &str = "Enter the ID of the person you would like to delete";
pub const RECORD_DELETED: &str = "The insured individual has been deleted";
pub const DELETE_NOT_FOUND: &str = "Person with the given ID not found";

pub const FILE_NAME_PROMPT: &str = "Enter a name of the file";
pub const FOLDER_PROMPT: &str = "Enter a name of the folder where you would like to save the file";
pub const FILE_CREATED: &str = "The file was created";

pub fn field_prompt(field: &str) -> String {
    format!("Enter the {}:", field)
}

pub fn record_modified(record: &Record) -> String {
    format!("The person has been modified to:\n{}", record)
}

pub fn export_failed(err: impl std::fmt::Display) -> String {
    format!("An error occurred while creating the file: {}", err)
}

/// One display line per record, each terminated by `\n`.
pub fn records_as_message(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| format!("{}\n", record))
        .collect()
}
