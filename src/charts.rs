use serde::Serialize;

use crate::models::{EngagementPoint, ManagedCourse};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

fn week_labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Week {}", i)).collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Week-over-week change in percent. The first week, and any week following
/// a zero score, reads 0.
pub fn weekly_improvement(performance: &[f64]) -> Series {
    let values = performance
        .iter()
        .enumerate()
        .map(|(i, &v)| match i.checked_sub(1).map(|p| performance[p]) {
            Some(prev) if prev != 0.0 => round2((v - prev) / prev * 100.0),
            _ => 0.0,
        })
        .collect();

    Series {
        title: "Improvement (%)".to_string(),
        labels: week_labels(performance.len()),
        values,
    }
}

pub fn weekly_performance(performance: &[f64]) -> Series {
    Series {
        title: "Weekly Performance Trends".to_string(),
        labels: week_labels(performance.len()),
        values: performance.to_vec(),
    }
}

pub fn student_distribution(courses: &[ManagedCourse]) -> Series {
    Series {
        title: "Student Distribution by Course".to_string(),
        labels: courses.iter().map(|c| c.name.clone()).collect(),
        values: courses.iter().map(|c| f64::from(c.students)).collect(),
    }
}

pub fn engagement_trends(points: &[EngagementPoint]) -> Series {
    Series {
        title: "Engagement Trends(%)".to_string(),
        labels: points.iter().map(|p| p.date.clone()).collect(),
        values: points.iter().map(|p| p.value).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_improvement() {
        let series = weekly_improvement(&[75.0, 80.0, 85.0, 90.0]);
        assert_eq!(series.labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(series.values, vec![0.0, 6.67, 6.25, 5.88]);
    }

    #[test]
    fn test_improvement_after_zero_week() {
        let series = weekly_improvement(&[0.0, 50.0]);
        assert_eq!(series.values, vec![0.0, 0.0]);
        assert!(weekly_improvement(&[]).values.is_empty());
    }

    #[test]
    fn test_student_distribution() {
        let courses = vec![
            ManagedCourse { id: 1, name: "React Basics".to_string(), progress: 80, students: 30 },
            ManagedCourse { id: 3, name: "UI/UX Fundamentals".to_string(), progress: 100, students: 40 },
        ];
        let series = student_distribution(&courses);
        assert_eq!(series.labels, vec!["React Basics", "UI/UX Fundamentals"]);
        assert_eq!(series.values, vec![30.0, 40.0]);
    }
}
