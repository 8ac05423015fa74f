//! Profile records shown on discovery cards.

use smallvec::SmallVec;

pub type ProfileId = u64;

/// One interest chip rendered on the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interest {
    pub emoji: String,
    pub label: String,
}

impl Interest {
    pub fn new(emoji: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            label: label.into(),
        }
    }
}

/// A user profile as the discovery card presents it.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub age: u8,
    /// Human-readable distance label, e.g. "3 miles away".
    pub distance: String,
    pub bio: String,
    pub interests: SmallVec<[Interest; 4]>,
    pub photos: Vec<String>,
}

impl Profile {
    pub fn new(id: ProfileId, name: impl Into<String>, age: u8) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            distance: String::new(),
            bio: String::new(),
            interests: SmallVec::new(),
            photos: Vec::new(),
        }
    }

    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = distance.into();
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_interest(mut self, emoji: impl Into<String>, label: impl Into<String>) -> Self {
        self.interests.push(Interest::new(emoji, label));
        self
    }

    pub fn with_photo(mut self, url: impl Into<String>) -> Self {
        self.photos.push(url.into());
        self
    }
}

/// Built-in fixture profiles for demos and tests.
pub fn sample_profiles() -> Vec<Profile> {
    vec![
        Profile::new(1, "Sarah", 28)
            .with_distance("3 miles away")
            .with_bio(
                "Morning workout enthusiast. Looking for a gym partner who \
                 loves HIIT and doesn't skip leg day",
            )
            .with_interest("🏋️", "Weight Training")
            .with_interest("🧘", "Yoga")
            .with_interest("🏃", "Running")
            .with_photo("https://example.com/photos/sarah-1.jpg"),
        Profile::new(2, "Mike", 31)
            .with_distance("1 mile away")
            .with_bio("Powerlifter by morning, climber by weekend")
            .with_interest("🏔️", "Climbing")
            .with_interest("🏋️", "Powerlifting"),
        Profile::new(3, "Emma", 26)
            .with_distance("5 miles away")
            .with_bio("Marathon season is the best season")
            .with_interest("🏃", "Running")
            .with_interest("🚴", "Cycling")
            .with_photo("https://example.com/photos/emma-1.jpg"),
        Profile::new(4, "James", 29)
            .with_distance("2 miles away")
            .with_bio("Calisthenics and cold plunges")
            .with_interest("🤸", "Calisthenics"),
        Profile::new(5, "Lisa", 27)
            .with_distance("4 miles away")
            .with_bio("Yoga instructor looking for a spotting partner")
            .with_interest("🧘", "Yoga")
            .with_interest("🏋️", "Weight Training"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_fields() {
        let profile = Profile::new(7, "Alex", 30)
            .with_distance("6 miles away")
            .with_bio("bio")
            .with_interest("🏃", "Running")
            .with_photo("https://example.com/a.jpg");

        assert_eq!(profile.id, 7);
        assert_eq!(profile.interests.len(), 1);
        assert_eq!(profile.interests[0].label, "Running");
        assert_eq!(profile.photos.len(), 1);
    }

    #[test]
    fn sample_profiles_have_unique_ids() {
        let profiles = sample_profiles();
        let mut ids: Vec<_> = profiles.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), profiles.len());
    }
}
