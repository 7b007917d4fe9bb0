use thiserror::Error;

/// Errors raised while turning raw entry input into a registrable `Entry`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid or missing name")]
    InvalidName,

    #[error("Invalid entry type '{0}', expected 'recipe' or 'ingredient'")]
    InvalidType(String),

    #[error("Missing entry type, expected 'recipe' or 'ingredient'")]
    MissingType,

    #[error("Entry name '{0}' must be unique")]
    DuplicateName(String),

    #[error("cookTime must be an integer >= 0")]
    InvalidCookTime,

    #[error("requiredItems must be a list")]
    MissingRequiredItems,

    #[error("Invalid requiredItem name at position {index}")]
    InvalidRequiredItemName { index: usize },

    #[error("Invalid quantity for requiredItem '{item}', expected an integer > 0")]
    InvalidQuantity { item: String },

    #[error("Duplicate requiredItem name '{0}' not allowed")]
    DuplicateRequiredItem(String),

    #[error("Malformed entry body: {0}")]
    MalformedBody(String),
}

/// Errors raised by the registry itself on insertion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Entry name must not be blank")]
    BlankName,

    #[error("Entry name '{0}' must be unique")]
    DuplicateName(String),

    #[error("Required item at position {index} has a blank name")]
    BlankRequiredItem { index: usize },

    #[error("Required item '{item}' must have a quantity > 0")]
    ZeroQuantity { item: String },

    #[error("Duplicate requiredItem name '{0}' not allowed")]
    DuplicateRequiredItem(String),
}

impl From<RegistryError> for ValidationError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::BlankName => ValidationError::InvalidName,
            RegistryError::DuplicateName(name) => ValidationError::DuplicateName(name),
            RegistryError::BlankRequiredItem { index } => {
                ValidationError::InvalidRequiredItemName { index }
            }
            RegistryError::ZeroQuantity { item } => ValidationError::InvalidQuantity { item },
            RegistryError::DuplicateRequiredItem(name) => {
                ValidationError::DuplicateRequiredItem(name)
            }
        }
    }
}

/// Errors that abort a recipe resolution. No partial result survives any of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Recipe '{0}' not found")]
    NotFound(String),

    #[error("Requested item '{0}' is not a recipe")]
    NotARecipe(String),

    #[error("Recipe '{required_by}' requires unknown item '{missing}'")]
    UnknownReference {
        missing: String,
        required_by: String,
    },

    #[error("Recipe graph contains a cycle: {}", path.join(" -> "))]
    CyclicReference { path: Vec<String> },

    #[error("Quantity or cook time overflowed while expanding '{item}'")]
    QuantityOverflow { item: String },
}

/// Errors from the handwriting name normalizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Invalid recipe name")]
    Empty,
}

/// Errors raised while importing a cookbook file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read cookbook file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse cookbook JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entry #{index} is invalid: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: ValidationError,
    },
}
