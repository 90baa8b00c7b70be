pub mod dog_repo;

pub use dog_repo::DogRepo;
