//! Sample catalog every store starts with

use std::collections::BTreeMap;

use super::{
    id::TrackId,
    track::{NOT_YET_DISTRIBUTED, PENDING_REVIEW, Track, TrackStatus},
};

struct SeedTrack {
    title: &'static str,
    artist_name: &'static str,
    release_date: &'static str,
    genre: &'static str,
    status: TrackStatus,
    duration: &'static str,
    plays: u64,
    revenue: f64,
    description: &'static str,
    lyrics: &'static str,
    file_size: &'static str,
    upload_date: &'static str,
    distributed_to: &'static [&'static str],
    /// instagram, twitter, spotify
    social: [&'static str; 3],
}

const FORMAT: &str = "MP3";
const BITRATE: &str = "320 kbps";

const SEED: &[SeedTrack] = &[
    SeedTrack {
        title: "Midnight Dreams",
        artist_name: "Luna Rodriguez",
        release_date: "2024-09-15",
        genre: "Pop",
        status: TrackStatus::Published,
        duration: "3:45",
        plays: 12450,
        revenue: 85.32,
        description: "A dreamy pop ballad that captures the essence of late-night contemplation and urban solitude.",
        lyrics: "Walking through the city lights...\nDreaming of a different life...\nUnderneath the starry sky...\nWondering if I could fly...",
        file_size: "8.2 MB",
        upload_date: "2024-09-10",
        distributed_to: &["Spotify", "Apple Music", "YouTube Music", "Amazon Music"],
        social: [
            "@luna_rodriguez_music",
            "@lunamusic",
            "https://open.spotify.com/artist/luna_rodriguez",
        ],
    },
    SeedTrack {
        title: "Electric Pulse",
        artist_name: "Neon Collective",
        release_date: "2024-09-10",
        genre: "Electronic",
        status: TrackStatus::UnderReview,
        duration: "4:12",
        plays: 8930,
        revenue: 62.15,
        description: "An energetic electronic track with pulsating beats and synthetic melodies that transport you to a neon-lit dance floor.",
        lyrics: "Feel the electric pulse...\nRunning through your veins...\nSynth waves crash around us...\nIn this digital maze...",
        file_size: "9.7 MB",
        upload_date: "2024-09-05",
        distributed_to: &[PENDING_REVIEW],
        social: [
            "@neon_collective",
            "@neoncollective",
            "https://open.spotify.com/artist/neon_collective",
        ],
    },
    SeedTrack {
        title: "Acoustic Soul",
        artist_name: "James Mitchell",
        release_date: "2024-09-05",
        genre: "Folk",
        status: TrackStatus::Published,
        duration: "3:28",
        plays: 15670,
        revenue: 103.89,
        description: "A heartfelt acoustic folk song that tells a story of love, loss, and redemption through simple yet profound lyrics.",
        lyrics: "Strumming on my old guitar...\nSinging songs from the heart...\nMemories of what we had...\nBefore we fell apart...",
        file_size: "7.9 MB",
        upload_date: "2024-08-30",
        distributed_to: &["Spotify", "Apple Music", "Bandcamp", "SoundCloud"],
        social: [
            "@jamesmitchell_music",
            "@jmitchellmusic",
            "https://open.spotify.com/artist/james_mitchell",
        ],
    },
    SeedTrack {
        title: "Bass Drop",
        artist_name: "DJ Thunder",
        release_date: "2024-08-30",
        genre: "EDM",
        status: TrackStatus::Draft,
        duration: "5:33",
        plays: 0,
        revenue: 0.0,
        description: "High-energy EDM track with massive bass drops and festival-ready beats designed to make crowds go wild.",
        lyrics: "Are you ready for the drop...\nFeel the bass in your soul...\nHands up, touch the sky...\nLet the music take control...",
        file_size: "12.8 MB",
        upload_date: "2024-08-25",
        distributed_to: &[NOT_YET_DISTRIBUTED],
        social: [
            "@djthunder_official",
            "@djthunder",
            "https://open.spotify.com/artist/dj_thunder",
        ],
    },
    SeedTrack {
        title: "Indie Vibes",
        artist_name: "The Wanderers",
        release_date: "2024-08-25",
        genre: "Indie Rock",
        status: TrackStatus::Published,
        duration: "4:01",
        plays: 22100,
        revenue: 156.47,
        description: "Nostalgic indie rock anthem with jangly guitars and introspective lyrics that capture the essence of modern wanderlust.",
        lyrics: "We are the wanderers...\nSearching for our place...\nIn this concrete jungle...\nTrying to find some space...",
        file_size: "9.2 MB",
        upload_date: "2024-08-20",
        distributed_to: &["Spotify", "Apple Music", "Bandcamp", "Deezer"],
        social: [
            "@thewanderers_band",
            "@wanderersband",
            "https://open.spotify.com/artist/the_wanderers",
        ],
    },
];

impl SeedTrack {
    fn to_track(&self, id: TrackId) -> Track {
        let [instagram, twitter, spotify] = self.social;
        let social_links = BTreeMap::from([
            ("instagram".to_string(), instagram.to_string()),
            ("twitter".to_string(), twitter.to_string()),
            ("spotify".to_string(), spotify.to_string()),
        ]);

        Track {
            id,
            title: self.title.to_string(),
            artist_name: self.artist_name.to_string(),
            release_date: self.release_date.to_string(),
            genre: self.genre.to_string(),
            status: self.status,
            duration: self.duration.to_string(),
            plays: self.plays,
            revenue: self.revenue,
            description: Some(self.description.to_string()),
            lyrics: Some(self.lyrics.to_string()),
            file_size: Some(self.file_size.to_string()),
            format: Some(FORMAT.to_string()),
            bitrate: Some(BITRATE.to_string()),
            upload_date: Some(self.upload_date.to_string()),
            distributed_to: self.distributed_to.iter().map(|p| p.to_string()).collect(),
            social_links,
        }
    }
}

/// Sample tracks with ids "1".."5", in display order
pub fn sample_tracks() -> Vec<Track> {
    SEED.iter()
        .enumerate()
        .map(|(i, seed)| seed.to_track(TrackId::from_seq(i as u64 + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sample_ids_are_sequential() {
        let ids: Vec<String> = sample_tracks()
            .into_iter()
            .map(|t| t.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_sample_titles_are_unique() {
        let tracks = sample_tracks();
        let titles: HashSet<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles.len(), tracks.len());
    }

    #[test]
    fn test_sample_tracks_carry_detail_fields() {
        for track in sample_tracks() {
            assert!(track.description.is_some(), "{} lacks description", track.title);
            assert!(!track.distributed_to.is_empty());
            assert_eq!(track.social_links.len(), 3);
        }
    }

    #[test]
    fn test_draft_sample_is_not_distributed() {
        let bass_drop = sample_tracks()
            .into_iter()
            .find(|t| t.title == "Bass Drop")
            .unwrap();

        assert_eq!(bass_drop.status, TrackStatus::Draft);
        assert_eq!(bass_drop.distributed_to, vec![NOT_YET_DISTRIBUTED]);
    }
}
