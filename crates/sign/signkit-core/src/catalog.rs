//! Video tutorial catalog.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VideoItem {
    pub id: &'static str,
    pub title: &'static str,
    pub path: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VideoCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub videos: &'static [VideoItem],
}

impl VideoCategory {
    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|v| v.id == video_id)
    }
}

const fn video(id: &'static str, title: &'static str, path: &'static str) -> VideoItem {
    VideoItem { id, title, path }
}

const BASIC: &[VideoItem] = &[
    video("basic-hello", "Hello", "/Videos/Hello.mp4"),
    video("basic-bye", "Bye", "/Videos/Bye.mp4"),
    video("basic-thank-you", "Thank You", "/Videos/Thank.mp4"),
];

const QUESTIONS: &[VideoItem] = &[
    video("q-what", "What", "/Videos/What.mp4"),
    video("q-where", "Where", "/Videos/Where.mp4"),
    video("q-who", "Who", "/Videos/Who.mp4"),
    video("q-why", "Why", "/Videos/Why.mp4"),
    video("q-when", "When", "/Videos/When.mp4"),
    video("q-how", "How", "/Videos/How.mp4"),
    video("q-which", "Which", "/Videos/Which.mp4"),
    video("q-whose", "Whose", "/Videos/Whose.mp4"),
];

const COMMON: &[VideoItem] = &[
    video("common-and", "And", "/Videos/And.mp4"),
    video("common-but", "But", "/Videos/But.mp4"),
    video("common-at", "At", "/Videos/At.mp4"),
    video("common-from", "From", "/Videos/From.mp4"),
    video("common-to", "To", "/Videos/To.mp4"),
    video("common-with", "With", "/Videos/With.mp4"),
    video("common-without", "Without", "/Videos/Without.mp4"),
];

const ACTIONS: &[VideoItem] = &[
    video("action-go", "Go", "/Videos/Go.mp4"),
    video("action-come", "Come", "/Videos/Come.mp4"),
    video("action-walk", "Walk", "/Videos/Walk.mp4"),
    video("action-eat", "Eat", "/Videos/Eat.mp4"),
    video("action-work", "Work", "/Videos/Work.mp4"),
    video("action-help", "Help", "/Videos/Help.mp4"),
    video("action-wash", "Wash", "/Videos/Wash.mp4"),
    video("action-can", "Can", "/Videos/Can.mp4"),
    video("action-cannot", "Cannot", "/Videos/Cannot.mp4"),
    video("action-do", "Do", "/Videos/Do.mp4"),
    video("action-do-not", "Do Not", "/Videos/Do Not.mp4"),
];

const DESCRIPTIVE: &[VideoItem] = &[
    video("desc-good", "Good", "/Videos/Good.mp4"),
    video("desc-great", "Great", "/Videos/Great.mp4"),
    video("desc-better", "Better", "/Videos/Better.mp4"),
    video("desc-best", "Best", "/Videos/Best.mp4"),
    video("desc-beautiful", "Beautiful", "/Videos/Beautiful.mp4"),
    video("desc-happy", "Happy", "/Videos/Happy.mp4"),
    video("desc-busy", "Busy", "/Videos/Busy.mp4"),
    video("desc-wrong", "Wrong", "/Videos/Wrong.mp4"),
];

const TIME: &[VideoItem] = &[
    video("time-day", "Day", "/Videos/Day.mp4"),
    video("time-before", "Before", "/Videos/Before.mp4"),
    video("time-after", "After", "/Videos/After.mp4"),
    video("time-again", "Again", "/Videos/Again.mp4"),
];

const PEOPLE: &[VideoItem] = &[
    video("people-me", "Me", "/Videos/Me.mp4"),
    video("people-home", "Home", "/Videos/Home.mp4"),
    video("people-world", "World", "/Videos/World.mp4"),
];

const NUMBERS: &[VideoItem] = &[
    video("num-0", "0", "/Videos/0.mp4"),
    video("num-1", "1", "/Videos/1.mp4"),
    video("num-2", "2", "/Videos/2.mp4"),
    video("num-3", "3", "/Videos/3.mp4"),
    video("num-4", "4", "/Videos/4.mp4"),
    video("num-5", "5", "/Videos/5.mp4"),
    video("num-6", "6", "/Videos/6.mp4"),
    video("num-7", "7", "/Videos/7.mp4"),
    video("num-8", "8", "/Videos/8.mp4"),
    video("num-9", "9", "/Videos/9.mp4"),
];

const CATEGORIES: &[VideoCategory] = &[
    VideoCategory { id: "basic", name: "Basic Greetings", videos: BASIC },
    VideoCategory { id: "questions", name: "Questions", videos: QUESTIONS },
    VideoCategory { id: "common", name: "Common Words", videos: COMMON },
    VideoCategory { id: "actions", name: "Actions", videos: ACTIONS },
    VideoCategory { id: "descriptive", name: "Descriptive Words", videos: DESCRIPTIVE },
    VideoCategory { id: "time", name: "Time-related Words", videos: TIME },
    VideoCategory { id: "people", name: "People & Places", videos: PEOPLE },
    VideoCategory { id: "numbers", name: "Numbers", videos: NUMBERS },
];

/// Default number of related videos shown next to the player.
pub const RELATED_LIMIT: usize = 5;

pub fn categories() -> &'static [VideoCategory] {
    CATEGORIES
}

pub fn all_videos() -> impl Iterator<Item = &'static VideoItem> {
    CATEGORIES.iter().flat_map(|c| c.videos.iter())
}

pub fn find_video(id: &str) -> Option<&'static VideoItem> {
    all_videos().find(|v| v.id == id)
}

pub fn category_of(id: &str) -> Option<&'static VideoCategory> {
    CATEGORIES.iter().find(|c| c.contains(id))
}

/// Up to `limit` other videos from the same category; for an unknown id, the
/// first `limit` videos of the whole catalog.
pub fn related_videos(id: &str, limit: usize) -> Vec<&'static VideoItem> {
    let pool: Box<dyn Iterator<Item = &'static VideoItem>> = match category_of(id) {
        Some(category) => Box::new(category.videos.iter()),
        None => Box::new(all_videos()),
    };
    pool.filter(|v| v.id != id).take(limit).collect()
}
