//! Plain-text rendering of instructor lists.

use drivematch_core::InstructorViewModel;
const NO_RESULTS: &str = "No instructors found";

/// Render one line per instructor, in the order given.
pub fn render_table(instructors: &[InstructorViewModel]) -> String {
    if instructors.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }

    let names: Vec<String> = instructors
        .iter()
        .map(|i| {
            if i.verified {
                format!("{} ✓", i.name)
            } else {
                i.name.clone()
            }
        })
        .collect();
    let name_width = names
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut lines = Vec::with_capacity(instructors.len() + 2);
    lines.push(format!(
        "{:<name_width$}  {:<20}  {:>6}  {:>7}  {:>5}  {:>8}  LICENSES",
        "NAME", "CITY", "RATING", "REVIEWS", "YEARS", "RATE/H"
    ));

    for (instructor, name) in instructors.iter().zip(&names) {
        let licenses: Vec<&str> = instructor.license_types.iter().map(|l| l.as_str()).collect();
        lines.push(format!(
            "{:<name_width$}  {:<20}  {:>6.1}  {:>7}  {:>5}  {:>8.2}  {}",
            name,
            instructor.city.as_deref().unwrap_or("-"),
            instructor.rating,
            instructor.review_count,
            instructor.years_experience,
            instructor.hourly_rate,
            licenses.join(",")
        ));
    }

    lines.push(format!("{} instructor(s)", instructors.len()));
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivematch_core::LicenseType;

    fn instructor(name: &str, verified: bool) -> InstructorViewModel {
        InstructorViewModel {
            id: "i1".into(),
            user_id: "u1".into(),
            name: name.into(),
            email: "x@example.com".into(),
            image: None,
            hourly_rate: 85.0,
            bio: String::new(),
            years_experience: 4,
            verified,
            rating: 4.75,
            review_count: 12,
            city: Some("Porto Alegre".into()),
            license_types: vec![LicenseType::B],
        }
    }

    #[test]
    fn test_empty_list_message() {
        assert_eq!(render_table(&[]), "No instructors found\n");
    }

    #[test]
    fn test_rows_rendered() {
        let table = render_table(&[instructor("Elisa", true), instructor("Fábio", false)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].contains("Elisa ✓"));
        assert!(lines[1].contains("Porto Alegre"));
        assert!(lines[1].contains("85.00"));
        assert!(lines[2].contains("Fábio"));
        assert!(lines[2].ends_with("B"));
        assert_eq!(lines[3], "2 instructor(s)");
        assert!(table.ends_with("2 instructor(s)\n"));
    }
}
