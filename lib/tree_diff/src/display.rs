use super::{Group, Label, RelPath, Report};

use colored::Colorize;

fn styled(label: Label) -> String {
    match label {
        Label::Added => label.name().green().to_string(),
        Label::Changed => label.name().yellow().to_string(),
        Label::Removed => label.name().red().to_string(),
        Label::Shared | Label::Unchanged => label.name().to_string(),
    }
}

fn joined(paths: &[RelPath], separator: &str) -> String {
    paths
        .iter()
        .map(RelPath::as_str)
        .collect::<Vec<&str>>()
        .join(separator)
}

/// Every group with its label underlined and one path per line. Groups are
/// separated by an empty line, empty groups still show their label
pub fn render_full(report: &Report) -> String {
    report
        .iter()
        .map(|Group { label, paths }| {
            let files = match paths.is_empty() {
                true => String::new(),
                false => joined(&paths, "\n") + "\n",
            };
            format!(
                "{}\n{}\n{}",
                styled(label),
                "-".repeat(label.name().len()),
                files
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// One line per non-empty group, listing at most `cutoff` paths followed by
/// how many were left out. Nothing at all when every group is empty
pub fn render_summary(report: &Report, cutoff: usize) -> Option<String> {
    let lines: Vec<String> = report
        .iter()
        .filter(|group| !group.paths.is_empty())
        .map(|Group { label, paths }| {
            let files = match (paths.len() <= cutoff, cutoff) {
                (true, _) => joined(&paths, ", "),
                (false, 0) => format!("and {} more", paths.len()),
                (false, _) => format!(
                    "{} and {} more",
                    joined(&paths[..cutoff], ", "),
                    paths.len() - cutoff
                ),
            };
            format!("{}: {}", styled(label), files)
        })
        .collect();

    match lines.is_empty() {
        true => None,
        false => Some(lines.join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_full, render_summary};
    use crate::{Label, RelPath, Report};
    use abst_fs::AbstPath;
    use rstest::rstest;

    fn rel(list: &[&str]) -> Vec<RelPath> {
        list.iter()
            .map(|path| RelPath::new(&AbstPath::from(path), false))
            .collect()
    }
    fn no_color() {
        colored::control::set_override(false);
    }

    #[test]
    fn full() {
        no_color();
        let mut report = Report::new();
        report.insert(Label::Added, rel(&["y.txt"]));
        report.insert(Label::Changed, rel(&["x.txt", "w.txt"]));
        report.insert(Label::Removed, rel(&[]));

        assert_eq!(
            render_full(&report),
            "Added\n-----\ny.txt\n\nChanged\n-------\nw.txt\nx.txt\n\nRemoved\n-------\n"
        );
        assert_eq!(render_full(&Report::new()), "");
    }

    #[rstest]
    #[case(3, "Added: p1, p2, p3 and 2 more")]
    #[case(5, "Added: p1, p2, p3, p4, p5")]
    #[case(9, "Added: p1, p2, p3, p4, p5")]
    #[case(1, "Added: p1 and 4 more")]
    #[case(0, "Added: and 5 more")]
    fn summary_cutoff(#[case] cutoff: usize, #[case] expected: &str) {
        no_color();
        let mut report = Report::new();
        report.insert(Label::Added, rel(&["p1", "p2", "p3", "p4", "p5"]));

        assert_eq!(render_summary(&report, cutoff).unwrap(), expected);
    }

    #[test]
    fn summary_skips_empty_groups() {
        no_color();
        let mut report = Report::new();
        report.insert(Label::Changed, rel(&[]));
        assert_eq!(render_summary(&report, 3), None);

        report.insert(Label::Removed, rel(&["gone"]));
        report.insert(Label::Added, rel(&["a", "b"]));
        assert_eq!(
            render_summary(&report, 3).unwrap(),
            "Removed: gone\nAdded: a, b"
        );
    }
}
