use super::{Report, ReportEntry};
use crate::outlier::OutlierRule;
use std::fmt;

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .groups
            .iter()
            .flat_map(|g| g.members.iter())
            .chain(self.outliers.iter())
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0);

        for group in &self.groups {
            let noun = if group.size == 1 { "record" } else { "records" };
            writeln!(
                f,
                "Cluster {} ({} {}, centroid {}):",
                group.id,
                group.size,
                noun,
                format_point(&group.centroid)
            )?;
            for member in &group.members {
                write_entry(f, member, width)?;
            }
            writeln!(f)?;
        }

        if !self.outliers.is_empty() {
            match self.outlier_rule {
                OutlierRule::Sigma => writeln!(
                    f,
                    "Outlier records ({}, outside {:.2} ± 2 × {:.2}):",
                    self.outliers.len(),
                    self.mean,
                    self.std_dev
                )?,
                OutlierRule::SmallClusters => writeln!(
                    f,
                    "Outlier records ({}, in below-average clusters):",
                    self.outliers.len()
                )?,
            }
            for outlier in &self.outliers {
                write_entry(f, outlier, width)?;
            }
        }

        Ok(())
    }
}

fn write_entry(f: &mut fmt::Formatter<'_>, entry: &ReportEntry, width: usize) -> fmt::Result {
    writeln!(f, "  {:<width$}  {:>5}", entry.name, entry.value, width = width)
}

fn format_point(point: &[f64]) -> String {
    match point {
        [single] => format!("{:.2}", single),
        _ => {
            let coords: Vec<String> = point.iter().map(|c| format!("{:.2}", c)).collect();
            format!("[{}]", coords.join(", "))
        }
    }
}
