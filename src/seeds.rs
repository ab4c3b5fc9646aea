use crate::models::{
    AdminSummary, EngagementPoint, ManagedCourse, OverviewCourse, ProgressStatus, Role, Session,
    StudentSummary, User, UserStatus,
};

pub fn users() -> Vec<User> {
    [
        (1, "Venkat", Role::Admin),
        (2, "Sam Doe", Role::Instructor),
        (3, "Alex Smith", Role::Student),
    ]
    .into_iter()
    .map(|(id, name, role)| User {
        id,
        name: name.to_string(),
        role,
        status: UserStatus::Active,
    })
    .collect()
}

pub fn instructor_courses() -> Vec<ManagedCourse> {
    [
        (1, "React Basics", 80, 30),
        (2, "Advanced JavaScript", 50, 25),
        (3, "UI/UX Fundamentals", 100, 40),
    ]
    .into_iter()
    .map(|(id, name, progress, students)| ManagedCourse {
        id,
        name: name.to_string(),
        progress,
        students,
    })
    .collect()
}

pub fn student_courses() -> Vec<OverviewCourse> {
    [
        (1, "React Fundamentals", 70),
        (2, "Advanced JS", 100),
        (3, "UI/UX Basics", 50),
    ]
    .into_iter()
    .map(|(id, name, progress)| OverviewCourse {
        id,
        name: name.to_string(),
        progress,
        status: ProgressStatus::from_progress(progress)
            .text()
            .to_string(),
    })
    .collect()
}

pub fn sessions() -> Vec<Session> {
    [
        (1, "React Fundamentals Live Session", "2024-12-01", "10:00 AM"),
        (2, "Advanced JS Q&A", "2024-12-02", "2:00 PM"),
        (3, "UI/UX Basics Demo", "2024-12-03", "5:00 PM"),
        (4, "Full-Stack Development Overview", "2024-12-04", "11:00 AM"),
        (5, "Database Optimization Techniques", "2024-12-05", "3:00 PM"),
        (6, "Modern JavaScript Frameworks", "2024-12-06", "1:00 PM"),
        (7, "Next.js Server-Side Rendering Workshop", "2024-12-07", "9:00 AM"),
        (8, "Accessibility in Web Development", "2024-12-08", "4:00 PM"),
        (9, "Advanced CSS Animations", "2024-12-09", "10:30 AM"),
        (10, "Building Scalable Applications", "2024-12-10", "6:00 PM"),
    ]
    .into_iter()
    .map(|(id, title, date, time)| Session {
        id,
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    })
    .collect()
}

pub fn student_summary() -> StudentSummary {
    StudentSummary {
        sessions_completed: 15,
        upcoming_sessions: 10,
        average_score: 87,
        performance: vec![75.0, 80.0, 85.0, 90.0],
    }
}

pub fn admin_summary() -> AdminSummary {
    AdminSummary {
        total_users: 2450,
        engagement_rate: "78%".to_string(),
        new_registrations: 32,
        engagement_trends: [
            ("2024-11-01", 60.0),
            ("2024-11-05", 75.0),
            ("2024-11-10", 78.0),
            ("2024-11-15", 80.0),
        ]
        .into_iter()
        .map(|(date, value)| EngagementPoint {
            date: date.to_string(),
            value,
        })
        .collect(),
    }
}
