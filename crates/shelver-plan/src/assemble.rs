//! New-name assembly from hierarchy levels.

use shelver_model::{Field, Hierarchy};

/// The name parts in rule order. Book and unit carry their `b`/`u`
/// prefixes when present; a blank level stays blank so trailing-blank
/// trimming can see it.
fn name_parts(hierarchy: &Hierarchy) -> [Field; 7] {
    [
        prefixed("b", &hierarchy.book),
        prefixed("u", &hierarchy.unit),
        hierarchy.section.clone(),
        hierarchy.subsection.clone(),
        hierarchy.task.clone(),
        hierarchy.activity_step.clone(),
        hierarchy.question.clone(),
    ]
}

fn prefixed(prefix: &str, field: &Field) -> Field {
    match field.as_str() {
        Some(value) => Field::Present(format!("{prefix}{value}")),
        None => Field::Blank,
    }
}

/// Assemble the base name (no extra id, no extension) for a record.
///
/// Trailing blank levels are dropped; remaining interior blanks become a
/// literal `0`; the survivors are joined with `_`. Returns `None` when
/// every level is blank — the caller reports that as a degenerate name
/// rather than emitting a bare extension.
pub fn assemble_base_name(hierarchy: &Hierarchy) -> Option<String> {
    let parts = name_parts(hierarchy);
    let last_present = parts.iter().rposition(|part| !part.is_blank())?;
    Some(
        parts[..=last_present]
            .iter()
            .map(Field::or_zero)
            .collect::<Vec<_>>()
            .join("_"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hierarchy(values: [&str; 7]) -> Hierarchy {
        let [book, unit, section, subsection, task, activity_step, question] =
            values.map(Field::parse);
        Hierarchy {
            book,
            unit,
            section,
            subsection,
            task,
            activity_step,
            question,
        }
    }

    #[test]
    fn test_trailing_blanks_are_dropped() {
        let name = assemble_base_name(&hierarchy(["2", "1", "", "", "", "", ""]));
        assert_eq!(name.as_deref(), Some("b2_u1"));
    }

    #[test]
    fn test_interior_blanks_become_zero() {
        let name = assemble_base_name(&hierarchy(["2", "1", "", "", "3", "", ""]));
        assert_eq!(name.as_deref(), Some("b2_u1_0_0_3"));
    }

    #[test]
    fn test_full_hierarchy() {
        let name = assemble_base_name(&hierarchy(["1", "1", "2", "1", "3a", "", ""]));
        assert_eq!(name.as_deref(), Some("b1_u1_2_1_3a"));
    }

    #[test]
    fn test_literal_zero_level_is_kept_as_value() {
        // A real "0" is a value, not a blank: it is not trimmed even when
        // trailing.
        let name = assemble_base_name(&hierarchy(["1", "1", "0", "", "", "", ""]));
        assert_eq!(name.as_deref(), Some("b1_u1_0"));
    }

    #[test]
    fn test_blank_book_is_filled_not_prefixed() {
        let name = assemble_base_name(&hierarchy(["", "1", "2", "", "", "", ""]));
        assert_eq!(name.as_deref(), Some("0_u1_2"));
    }

    #[test]
    fn test_all_blank_yields_none() {
        assert_eq!(assemble_base_name(&hierarchy(["", "", "", "", "", "", ""])), None);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn level() -> impl Strategy<Value = String> {
            prop_oneof![Just(String::new()), "[a-z0-9]{1,3}"]
        }

        proptest! {
            #[test]
            fn assembled_name_has_no_trailing_blanks(
                levels in prop::array::uniform7(level())
            ) {
                let refs: [&str; 7] = [
                    &levels[0], &levels[1], &levels[2], &levels[3],
                    &levels[4], &levels[5], &levels[6],
                ];
                let hierarchy = hierarchy(refs);
                let parts = hierarchy.levels();
                let last_present = parts.iter().rposition(|f| !f.is_blank());
                match (assemble_base_name(&hierarchy), last_present) {
                    (None, None) => {}
                    (Some(name), Some(last)) => {
                        // One segment per level up to the last present one,
                        // none of them empty.
                        let segments: Vec<&str> = name.split('_').collect();
                        prop_assert_eq!(segments.len(), last + 1);
                        prop_assert!(segments.iter().all(|s| !s.is_empty()));
                    }
                    (name, _) => prop_assert!(false, "mismatch: {:?}", name),
                }
            }
        }
    }
}
