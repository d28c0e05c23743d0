use serde::Serialize;

// One entry of the activity directory. The name is the directory key and is
// carried alongside the record so listing can rebuild the keyed mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRow {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Advisory capacity. Nothing enforces it.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityRow {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Spots left before the advisory capacity is reached. Saturates at zero
    /// since rosters may grow past `max_participants`.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}
