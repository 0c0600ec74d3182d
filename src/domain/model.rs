use serde::Deserialize;
use std::fmt;

/// A dog. Plain data: every field is independent and nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct Dog {
    id: i64,
    name: String,
    age: i32,
}

impl Dog {
    pub fn new(id: i64, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dog(id={}, name={}, age={})", self.id, self.name, self.age)
    }
}
