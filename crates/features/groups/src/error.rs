use std::borrow::Cow;

/// Group form and edit dialog outcomes. `Display` is the user-facing message.
#[fhub_derive::fhub_error]
pub enum GroupError {
    #[error("Group name is required{}", format_context(.context))]
    NameRequired { context: Option<Cow<'static, str>> },

    #[error("You have to select at least {} fonts{}", spell_count(.min), format_context(.context))]
    TooFewFonts { min: usize, selected: usize, context: Option<Cow<'static, str>> },

    #[error("Font \"{name}\" is not registered{}", format_context(.context))]
    UnknownFont { name: String, context: Option<Cow<'static, str>> },

    #[error("A font group named \"{name}\" already exists{}", format_context(.context))]
    DuplicateName { name: String, context: Option<Cow<'static, str>> },

    #[error("Font group \"{name}\" no longer exists{}", format_context(.context))]
    GroupNotFound { name: String, context: Option<Cow<'static, str>> },

    #[error("Internal group error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn spell_count(n: &usize) -> Cow<'static, str> {
    const WORDS: [&str; 9] = ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight"];
    WORDS.get(*n).map_or_else(|| Cow::Owned(n.to_string()), |w| Cow::Borrowed(*w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_fonts_spells_the_minimum() {
        let err = GroupError::TooFewFonts { min: 2, selected: 1, context: None };
        assert_eq!(err.to_string(), "You have to select at least two fonts");

        let err = GroupError::TooFewFonts { min: 12, selected: 1, context: None };
        assert_eq!(err.to_string(), "You have to select at least 12 fonts");
    }
}
