/// Dog identifiers are caller-chosen strings.
pub type DogId = String;
