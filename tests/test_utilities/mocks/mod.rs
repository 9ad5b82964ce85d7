mod manual_clock;
mod mock_bug_tracker;

pub use manual_clock::ManualClock;
pub use mock_bug_tracker::MockBugTracker;
