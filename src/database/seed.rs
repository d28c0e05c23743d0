use crate::database::activity_directory::ActivityDirectory;
use crate::models::ActivityRow;

/// The activities every process starts with.
pub fn seed_activities() -> Vec<ActivityRow> {
    vec![
        ActivityRow::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ActivityRow::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ActivityRow::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ActivityRow::new(
            "Basketball Team",
            "Competitive basketball league and practice",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
        )
        .with_participants(["alex@mergington.edu"]),
        ActivityRow::new(
            "Tennis Club",
            "Learn tennis skills and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
            10,
        )
        .with_participants(["sarah@mergington.edu"]),
        ActivityRow::new(
            "Art Studio",
            "Painting, drawing, and sculpture techniques",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
        )
        .with_participants(["maya@mergington.edu"]),
        ActivityRow::new(
            "Drama Club",
            "Theater performances and acting workshops",
            "Thursdays, 4:00 PM - 5:30 PM",
            25,
        )
        .with_participants(["james@mergington.edu", "lisa@mergington.edu"]),
        ActivityRow::new(
            "Debate Team",
            "Competitive debate and public speaking",
            "Mondays and Fridays, 3:30 PM - 4:30 PM",
            16,
        )
        .with_participants(["noah@mergington.edu"]),
        ActivityRow::new(
            "Science Club",
            "Hands-on experiments and STEM exploration",
            "Tuesdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["ava@mergington.edu", "ethan@mergington.edu"]),
    ]
}

pub fn seeded_directory() -> ActivityDirectory {
    ActivityDirectory::from_rows(seed_activities())
}
