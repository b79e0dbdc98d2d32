//! Static page content.
//!
//! Everything the pages display is built into the binary and loaded once at
//! startup into a [`ContentStore`]. The store is read-only; the only
//! user-generated content (community posts) lives in the browser session.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sherise_core::Price;
use sherise_core::types::price::group_thousands;
use uuid::Uuid;

// =============================================================================
// Content Types
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Reminder {
    pub title: &'static str,
    /// Module the reminder belongs to (`health`, `career`, `community`).
    pub kind: &'static str,
    pub date: NaiveDate,
}

impl Reminder {
    /// Date as shown on the dashboard, e.g. `Feb 15`.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

/// Phase of the menstrual cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
    PreMenstrual,
}

impl CyclePhase {
    pub const ALL: [Self; 5] = [
        Self::Menstrual,
        Self::Follicular,
        Self::Ovulation,
        Self::Luteal,
        Self::PreMenstrual,
    ];

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Menstrual => "healthMenstrual",
            Self::Follicular => "healthFollicular",
            Self::Ovulation => "healthOvulation",
            Self::Luteal => "healthLuteal",
            Self::PreMenstrual => "healthPreMenstrual",
        }
    }

    /// CSS modifier class.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Menstrual => "menstrual",
            Self::Follicular => "follicular",
            Self::Ovulation => "ovulation",
            Self::Luteal => "luteal",
            Self::PreMenstrual => "pre-menstrual",
        }
    }
}

/// One sample of the cycle chart. Energy and mood are percentages.
#[derive(Debug, Clone, Copy)]
pub struct CyclePoint {
    pub day: u8,
    pub phase: CyclePhase,
    pub energy: u8,
    pub mood: u8,
}

/// Titled tip with an icon name, used for mental wellness and finance tips.
#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Titled card without an icon (legal rights, safety tips).
#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FitnessRoutine {
    pub name: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct HealthResource {
    pub title: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Helpline {
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
    pub available: &'static str,
}

impl Helpline {
    /// `tel:` URI for the number.
    #[must_use]
    pub fn tel_href(&self) -> String {
        let digits: String = self
            .number
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Mentor {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub expertise: &'static [&'static str],
    pub avatar: &'static str,
    pub rating: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub salary: &'static str,
    pub posted: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Course {
    pub title: &'static str,
    pub provider: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub enrolled: u32,
}

impl Course {
    /// Enrolment count with thousands separators.
    #[must_use]
    pub fn enrolled_label(&self) -> String {
        group_thousands(&self.enrolled.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NetworkingEvent {
    pub title: &'static str,
    pub date: NaiveDate,
    pub location: &'static str,
    pub attendees: u32,
    pub kind: &'static str,
}

impl NetworkingEvent {
    /// Date as shown on the career page, e.g. `March 15, 2024`.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Story {
    pub id: u32,
    pub name: &'static str,
    pub title: &'static str,
    pub preview: &'static str,
    pub full_story: &'static str,
    /// Initials shown in place of a photo.
    pub image: &'static str,
    pub category: &'static str,
}

// =============================================================================
// Community
// =============================================================================

/// Discussion topic of a community post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Career,
    Health,
    Lifestyle,
    Education,
    Finance,
    Relationships,
}

/// Error parsing a [`Topic`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown topic: {0}")]
pub struct TopicError(pub String);

impl Topic {
    /// Filter order on the community page.
    pub const ALL: [Self; 6] = [
        Self::Career,
        Self::Health,
        Self::Lifestyle,
        Self::Education,
        Self::Finance,
        Self::Relationships,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Career => "Career",
            Self::Health => "Health",
            Self::Lifestyle => "Lifestyle",
            Self::Education => "Education",
            Self::Finance => "Finance",
            Self::Relationships => "Relationships",
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Career => "communityCareer",
            Self::Health => "communityHealth",
            Self::Lifestyle => "communityLifestyle",
            Self::Education => "communityEducation",
            Self::Finance => "communityFinance",
            Self::Relationships => "communityRelationships",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TopicError(s.to_string()))
    }
}

/// A community post, either seeded or written by the session's user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: Uuid,
    pub author: String,
    pub avatar: String,
    pub title: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub posted_at: DateTime<Utc>,
    pub topic: Topic,
}

impl CommunityPost {
    /// Author shown on posts written in this session.
    pub const OWN_AUTHOR: &'static str = "You";
    /// Avatar shown on posts written in this session.
    pub const OWN_AVATAR: &'static str = "YO";

    /// A new post by the session's user. Returns `None` if the title or
    /// content is blank.
    #[must_use]
    pub fn own(title: &str, content: &str, topic: Topic, now: DateTime<Utc>) -> Option<Self> {
        let (title, content) = (title.trim(), content.trim());
        if title.is_empty() || content.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            author: Self::OWN_AUTHOR.to_string(),
            avatar: Self::OWN_AVATAR.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            likes: 0,
            comments: 0,
            posted_at: now,
            topic,
        })
    }

    /// How long ago the post was made, relative to `now`.
    #[must_use]
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        relative_time(now.signed_duration_since(self.posted_at))
    }
}

fn relative_time(elapsed: Duration) -> String {
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };
    if elapsed < Duration::minutes(1) {
        "Just now".to_string()
    } else if elapsed < Duration::hours(1) {
        plural(elapsed.num_minutes(), "minute")
    } else if elapsed < Duration::days(1) {
        plural(elapsed.num_hours(), "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}

// =============================================================================
// Budget
// =============================================================================

/// One expense line of the monthly budget.
#[derive(Debug, Clone)]
pub struct Expense {
    pub name: &'static str,
    pub amount: Price,
    /// Share of total expenses, whole percent.
    pub share: u32,
}

#[derive(Debug, Clone)]
pub struct SavingsGoal {
    pub name: &'static str,
    pub target: Price,
    pub current: Price,
}

impl SavingsGoal {
    /// Progress towards the target, whole percent, capped at 100.
    #[must_use]
    pub fn progress(&self) -> u32 {
        percent(self.current.amount, self.target.amount).min(100)
    }

    /// Amount still to save, never negative.
    #[must_use]
    pub fn remaining(&self) -> Price {
        let left = (self.target.amount - self.current.amount).max(Decimal::ZERO);
        Price::new(left, self.target.currency_code)
    }
}

/// Monthly budget summary.
#[derive(Debug, Clone)]
pub struct Budget {
    pub income: Price,
    pub expenses: Vec<Expense>,
    pub savings_goal: SavingsGoal,
}

impl Budget {
    fn new(income: i64, lines: &[(&'static str, i64)], goal: SavingsGoal) -> Self {
        let total: i64 = lines.iter().map(|(_, amount)| amount).sum();
        let expenses = lines
            .iter()
            .map(|&(name, amount)| Expense {
                name,
                amount: Price::usd(amount),
                share: percent(Decimal::from(amount), Decimal::from(total)),
            })
            .collect();
        Self {
            income: Price::usd(income),
            expenses,
            savings_goal: goal,
        }
    }

    #[must_use]
    pub fn total_expenses(&self) -> Price {
        let total = self.expenses.iter().map(|e| e.amount.amount).sum();
        Price::new(total, self.income.currency_code)
    }

    /// The `Savings` line of the budget, which is also the monthly
    /// contribution to the savings goal.
    #[must_use]
    pub fn monthly_savings(&self) -> Price {
        self.expenses
            .iter()
            .find(|e| e.name == "Savings")
            .map_or_else(|| Price::usd(0), |e| e.amount)
    }
}

/// `part / whole` as a whole percentage, rounded half away from zero.
fn percent(part: Decimal, whole: Decimal) -> u32 {
    if whole.is_zero() {
        return 0;
    }
    (part * Decimal::ONE_HUNDRED / whole)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

// =============================================================================
// Content Store
// =============================================================================

struct Content {
    wellness_tips: Vec<&'static str>,
    quotes: Vec<Quote>,
    reminders: Vec<Reminder>,
    cycle: Vec<CyclePoint>,
    mental_wellness_tips: Vec<Tip>,
    fitness_routines: Vec<FitnessRoutine>,
    health_resources: Vec<HealthResource>,
    helplines: Vec<Helpline>,
    legal_rights: Vec<InfoCard>,
    safety_tips: Vec<InfoCard>,
    mentors: Vec<Mentor>,
    jobs: Vec<Job>,
    courses: Vec<Course>,
    events: Vec<NetworkingEvent>,
    community_posts: Vec<CommunityPost>,
    budget: Budget,
    financial_tips: Vec<Tip>,
    stories: Vec<Story>,
}

/// Read-only store of all page content.
///
/// Cheap to clone; the data is shared behind an `Arc`.
#[derive(Clone)]
pub struct ContentStore {
    inner: Arc<Content>,
}

impl fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentStore")
            .field("stories", &self.inner.stories.len())
            .field("community_posts", &self.inner.community_posts.len())
            .finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Load the built-in content. Seeded community posts are dated relative
    /// to `now`.
    #[must_use]
    pub fn builtin(now: DateTime<Utc>) -> Self {
        Self {
            inner: Arc::new(Content {
                wellness_tips: WELLNESS_TIPS.to_vec(),
                quotes: QUOTES.to_vec(),
                reminders: reminders(),
                cycle: CYCLE.to_vec(),
                mental_wellness_tips: MENTAL_WELLNESS_TIPS.to_vec(),
                fitness_routines: FITNESS_ROUTINES.to_vec(),
                health_resources: HEALTH_RESOURCES.to_vec(),
                helplines: HELPLINES.to_vec(),
                legal_rights: LEGAL_RIGHTS.to_vec(),
                safety_tips: SAFETY_TIPS.to_vec(),
                mentors: MENTORS.to_vec(),
                jobs: JOBS.to_vec(),
                courses: COURSES.to_vec(),
                events: events(),
                community_posts: community_posts(now),
                budget: budget(),
                financial_tips: FINANCIAL_TIPS.to_vec(),
                stories: STORIES.to_vec(),
            }),
        }
    }

    #[must_use]
    pub fn wellness_tips(&self) -> &[&'static str] {
        &self.inner.wellness_tips
    }

    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.inner.quotes
    }

    #[must_use]
    pub fn reminders(&self) -> &[Reminder] {
        &self.inner.reminders
    }

    #[must_use]
    pub fn cycle(&self) -> &[CyclePoint] {
        &self.inner.cycle
    }

    #[must_use]
    pub fn mental_wellness_tips(&self) -> &[Tip] {
        &self.inner.mental_wellness_tips
    }

    #[must_use]
    pub fn fitness_routines(&self) -> &[FitnessRoutine] {
        &self.inner.fitness_routines
    }

    #[must_use]
    pub fn health_resources(&self) -> &[HealthResource] {
        &self.inner.health_resources
    }

    #[must_use]
    pub fn helplines(&self) -> &[Helpline] {
        &self.inner.helplines
    }

    #[must_use]
    pub fn legal_rights(&self) -> &[InfoCard] {
        &self.inner.legal_rights
    }

    #[must_use]
    pub fn safety_tips(&self) -> &[InfoCard] {
        &self.inner.safety_tips
    }

    #[must_use]
    pub fn mentors(&self) -> &[Mentor] {
        &self.inner.mentors
    }

    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.inner.jobs
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.inner.courses
    }

    #[must_use]
    pub fn events(&self) -> &[NetworkingEvent] {
        &self.inner.events
    }

    /// Seeded community posts, newest first.
    #[must_use]
    pub fn community_posts(&self) -> &[CommunityPost] {
        &self.inner.community_posts
    }

    #[must_use]
    pub fn budget(&self) -> &Budget {
        &self.inner.budget
    }

    #[must_use]
    pub fn financial_tips(&self) -> &[Tip] {
        &self.inner.financial_tips
    }

    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.inner.stories
    }

    #[must_use]
    pub fn story(&self, id: u32) -> Option<&Story> {
        self.inner.stories.iter().find(|s| s.id == id)
    }
}

// =============================================================================
// Built-in Data
// =============================================================================

const WELLNESS_TIPS: [&str; 5] = [
    "Take 5 deep breaths to center yourself this morning.",
    "Drink a glass of water before your first cup of coffee.",
    "Take a 10-minute walk to boost your energy and mood.",
    "Practice gratitude: write down 3 things you're thankful for.",
    "Stretch for 5 minutes to release tension in your body.",
];

const QUOTES: [Quote; 5] = [
    Quote {
        text: "She believed she could, so she did.",
        author: "R.S. Grey",
    },
    Quote {
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
    },
    Quote {
        text: "Well-behaved women seldom make history.",
        author: "Laurel Thatcher Ulrich",
    },
    Quote {
        text: "You are more powerful than you know.",
        author: "Melissa Etheridge",
    },
    Quote {
        text: "There is no limit to what we, as women, can accomplish.",
        author: "Michelle Obama",
    },
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            title: "Period expected in 3 days",
            kind: "health",
            date: date(2024, 2, 15),
        },
        Reminder {
            title: "Career workshop tomorrow",
            kind: "career",
            date: date(2024, 2, 13),
        },
        Reminder {
            title: "Community meetup this weekend",
            kind: "community",
            date: date(2024, 2, 17),
        },
    ]
}

const fn point(day: u8, phase: CyclePhase, energy: u8, mood: u8) -> CyclePoint {
    CyclePoint {
        day,
        phase,
        energy,
        mood,
    }
}

const CYCLE: [CyclePoint; 8] = [
    point(1, CyclePhase::Menstrual, 30, 40),
    point(5, CyclePhase::Follicular, 60, 65),
    point(10, CyclePhase::Follicular, 80, 85),
    point(14, CyclePhase::Ovulation, 95, 90),
    point(18, CyclePhase::Luteal, 75, 70),
    point(22, CyclePhase::Luteal, 55, 50),
    point(26, CyclePhase::Luteal, 40, 35),
    point(28, CyclePhase::PreMenstrual, 30, 30),
];

const MENTAL_WELLNESS_TIPS: [Tip; 4] = [
    Tip {
        title: "Practice Mindfulness",
        description: "Take 10 minutes daily to meditate and focus on your breathing.",
        icon: "brain",
    },
    Tip {
        title: "Connect with Others",
        description: "Reach out to a friend or family member today.",
        icon: "heart",
    },
    Tip {
        title: "Get Moving",
        description: "Physical activity releases endorphins and improves mood.",
        icon: "activity",
    },
    Tip {
        title: "Sleep Well",
        description: "Aim for 7-9 hours of quality sleep each night.",
        icon: "moon",
    },
];

const FITNESS_ROUTINES: [FitnessRoutine; 4] = [
    FitnessRoutine {
        name: "Morning Yoga Flow",
        duration: "20 min",
        level: "Beginner",
        category: "Yoga",
    },
    FitnessRoutine {
        name: "HIIT Cardio Blast",
        duration: "30 min",
        level: "Intermediate",
        category: "Cardio",
    },
    FitnessRoutine {
        name: "Strength Training",
        duration: "45 min",
        level: "Advanced",
        category: "Strength",
    },
    FitnessRoutine {
        name: "Relaxing Stretches",
        duration: "15 min",
        level: "All Levels",
        category: "Flexibility",
    },
];

const HEALTH_RESOURCES: [HealthResource; 4] = [
    HealthResource {
        title: "Understanding PCOS",
        category: "Reproductive Health",
        read_time: "5 min",
    },
    HealthResource {
        title: "Nutrition During Pregnancy",
        category: "Maternal Health",
        read_time: "8 min",
    },
    HealthResource {
        title: "Managing PMS Symptoms",
        category: "Menstrual Health",
        read_time: "4 min",
    },
    HealthResource {
        title: "Breast Self-Examination Guide",
        category: "Preventive Care",
        read_time: "6 min",
    },
];

const HELPLINES: [Helpline; 4] = [
    Helpline {
        name: "Women Helpline",
        number: "181",
        description: "24/7 emergency support for women",
        available: "24/7",
    },
    Helpline {
        name: "Domestic Violence Hotline",
        number: "1-800-799-7233",
        description: "Support for domestic abuse victims",
        available: "24/7",
    },
    Helpline {
        name: "Mental Health Crisis Line",
        number: "988",
        description: "Mental health emergency support",
        available: "24/7",
    },
    Helpline {
        name: "Legal Aid Services",
        number: "1-800-555-0123",
        description: "Free legal consultation",
        available: "Mon-Fri 9AM-5PM",
    },
];

const LEGAL_RIGHTS: [InfoCard; 4] = [
    InfoCard {
        title: "Right to Equal Pay",
        description: "Women are entitled to equal pay for equal work under the Equal Pay Act.",
    },
    InfoCard {
        title: "Protection from Harassment",
        description: "Workplace sexual harassment is prohibited by law. You can file complaints with HR or EEOC.",
    },
    InfoCard {
        title: "Maternity Leave Rights",
        description: "Eligible employees can take up to 12 weeks of unpaid, job-protected leave.",
    },
    InfoCard {
        title: "Domestic Violence Protection",
        description: "Restraining orders and protective measures are available through family courts.",
    },
];

const SAFETY_TIPS: [InfoCard; 4] = [
    InfoCard {
        title: "Trust Your Instincts",
        description: "If something feels wrong, remove yourself from the situation immediately.",
    },
    InfoCard {
        title: "Share Your Location",
        description: "Use location-sharing apps with trusted contacts when traveling alone.",
    },
    InfoCard {
        title: "Emergency Contacts",
        description: "Keep emergency numbers on speed dial and memorize at least one.",
    },
    InfoCard {
        title: "Self-Defense Basics",
        description: "Learn basic self-defense techniques for emergency situations.",
    },
];

const MENTORS: [Mentor; 4] = [
    Mentor {
        name: "Dr. Sarah Chen",
        title: "Chief Technology Officer",
        company: "TechCorp Inc.",
        expertise: &["Tech Leadership", "Career Growth"],
        avatar: "SC",
        rating: 4.9,
    },
    Mentor {
        name: "Maria Rodriguez",
        title: "Entrepreneur",
        company: "StartUp Labs",
        expertise: &["Entrepreneurship", "Funding"],
        avatar: "MR",
        rating: 4.8,
    },
    Mentor {
        name: "Dr. Aisha Patel",
        title: "Research Scientist",
        company: "BioGen Labs",
        expertise: &["STEM Careers", "Research"],
        avatar: "AP",
        rating: 4.9,
    },
    Mentor {
        name: "Jennifer Williams",
        title: "Marketing Director",
        company: "Global Brands",
        expertise: &["Marketing", "Brand Strategy"],
        avatar: "JW",
        rating: 4.7,
    },
];

const JOBS: [Job; 4] = [
    Job {
        title: "Software Engineer",
        company: "TechStart Inc.",
        location: "Remote",
        kind: "Full-time",
        salary: "$80k - $120k",
        posted: "2 days ago",
    },
    Job {
        title: "Marketing Manager",
        company: "Brand Solutions",
        location: "New York, NY",
        kind: "Full-time",
        salary: "$70k - $90k",
        posted: "1 week ago",
    },
    Job {
        title: "UX Designer",
        company: "Design Studio",
        location: "Remote",
        kind: "Contract",
        salary: "$60 - $80/hr",
        posted: "3 days ago",
    },
    Job {
        title: "Project Manager",
        company: "Consulting Group",
        location: "Chicago, IL",
        kind: "Full-time",
        salary: "$75k - $95k",
        posted: "5 days ago",
    },
];

const COURSES: [Course; 4] = [
    Course {
        title: "Women in Leadership",
        provider: "Coursera",
        duration: "6 weeks",
        level: "Intermediate",
        enrolled: 15_000,
    },
    Course {
        title: "Financial Planning Basics",
        provider: "Udemy",
        duration: "4 weeks",
        level: "Beginner",
        enrolled: 25_000,
    },
    Course {
        title: "Coding Bootcamp",
        provider: "Codecademy",
        duration: "12 weeks",
        level: "Beginner",
        enrolled: 50_000,
    },
    Course {
        title: "Public Speaking Mastery",
        provider: "LinkedIn Learning",
        duration: "3 weeks",
        level: "All Levels",
        enrolled: 12_000,
    },
];

fn events() -> Vec<NetworkingEvent> {
    vec![
        NetworkingEvent {
            title: "Women in Tech Summit",
            date: date(2024, 3, 15),
            location: "San Francisco, CA",
            attendees: 500,
            kind: "Conference",
        },
        NetworkingEvent {
            title: "Entrepreneurship Mixer",
            date: date(2024, 3, 22),
            location: "Virtual",
            attendees: 200,
            kind: "Networking",
        },
        NetworkingEvent {
            title: "Career Fair 2024",
            date: date(2024, 4, 5),
            location: "New York, NY",
            attendees: 1000,
            kind: "Job Fair",
        },
        NetworkingEvent {
            title: "Leadership Workshop",
            date: date(2024, 4, 12),
            location: "Virtual",
            attendees: 150,
            kind: "Workshop",
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed_post(
    n: u128,
    author: &str,
    avatar: &str,
    title: &str,
    content: &str,
    likes: u32,
    comments: u32,
    posted_at: DateTime<Utc>,
    topic: Topic,
) -> CommunityPost {
    CommunityPost {
        id: Uuid::from_u128(n),
        author: author.to_string(),
        avatar: avatar.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        likes,
        comments,
        posted_at,
        topic,
    }
}

fn community_posts(now: DateTime<Utc>) -> Vec<CommunityPost> {
    vec![
        seed_post(
            1,
            "EmmaJ",
            "EJ",
            "Finally got my promotion!",
            "After months of hard work and advocating for myself, I finally got the senior position! Never give up, ladies! 💪",
            234,
            45,
            now - Duration::hours(2),
            Topic::Career,
        ),
        seed_post(
            2,
            "HealthyMom",
            "HM",
            "Tips for managing work-life balance",
            "As a working mom of two, I've learned some valuable lessons about balance. Here are my top 5 tips...",
            189,
            67,
            now - Duration::hours(5),
            Topic::Lifestyle,
        ),
        seed_post(
            3,
            "TechSister",
            "TS",
            "Starting my coding journey",
            "Just enrolled in my first coding bootcamp! Any advice from fellow women in tech?",
            156,
            89,
            now - Duration::days(1),
            Topic::Education,
        ),
        seed_post(
            4,
            "FitnessFan",
            "FF",
            "30-day fitness challenge results",
            "Completed the 30-day challenge and feeling amazing! Lost 5 lbs and gained so much confidence.",
            312,
            78,
            now - Duration::days(2),
            Topic::Health,
        ),
    ]
}

fn budget() -> Budget {
    Budget::new(
        5000,
        &[
            ("Housing", 1500),
            ("Food", 600),
            ("Transport", 300),
            ("Utilities", 200),
            ("Entertainment", 150),
            ("Savings", 750),
            ("Other", 500),
        ],
        SavingsGoal {
            name: "Emergency Fund",
            target: Price::usd(10_000),
            current: Price::usd(6500),
        },
    )
}

const FINANCIAL_TIPS: [Tip; 4] = [
    Tip {
        title: "Build an Emergency Fund",
        description: "Aim to save 3-6 months of living expenses for unexpected situations.",
        icon: "piggy-bank",
    },
    Tip {
        title: "Track Your Spending",
        description: "Know where your money goes by tracking every expense for a month.",
        icon: "chart-bar",
    },
    Tip {
        title: "Invest Early",
        description: "Start investing as early as possible to benefit from compound interest.",
        icon: "trending-up",
    },
    Tip {
        title: "Negotiate Your Salary",
        description: "Research market rates and confidently negotiate for fair compensation.",
        icon: "handshake",
    },
];

const STORIES: [Story; 4] = [
    Story {
        id: 1,
        name: "Priya Sharma",
        title: "From Rural Village to Tech CEO",
        preview: "Growing up in a small village with limited resources, Priya taught herself to code using borrowed books...",
        full_story: "Growing up in a small village with limited resources, Priya taught herself to code using borrowed books and occasional internet access at a community center. Against all odds, she earned a scholarship to study computer science and eventually founded her own tech startup that now employs over 100 people. Her company focuses on creating technology solutions for rural communities, bringing her journey full circle.",
        image: "PS",
        category: "Technology",
    },
    Story {
        id: 2,
        name: "Maria Gonzalez",
        title: "Single Mom to Successful Entrepreneur",
        preview: "After becoming a single mother at 22, Maria started selling homemade products from her kitchen...",
        full_story: "After becoming a single mother at 22, Maria started selling homemade skincare products from her kitchen to make ends meet. What started as a survival strategy grew into a multi-million dollar beauty brand. Today, her products are sold in stores across the country, and she runs workshops teaching other single mothers how to start their own businesses.",
        image: "MG",
        category: "Entrepreneurship",
    },
    Story {
        id: 3,
        name: "Dr. Aisha Ibrahim",
        title: "Breaking Barriers in Medicine",
        preview: "As the first woman in her family to attend college, Aisha faced numerous challenges...",
        full_story: "As the first woman in her family to attend college, Aisha faced numerous challenges on her path to becoming a neurosurgeon. She persevered through financial difficulties, cultural expectations, and gender discrimination in a male-dominated field. Today, she leads a renowned research team and mentors young women pursuing careers in medicine.",
        image: "AI",
        category: "Healthcare",
    },
    Story {
        id: 4,
        name: "Lisa Chen",
        title: "Athlete to Advocate",
        preview: "A career-ending injury could have been the end of Lisa's story, but it was just the beginning...",
        full_story: "A career-ending injury could have been the end of Lisa's story, but it was just the beginning. The former Olympic gymnast channeled her competitive spirit into advocacy for women in sports. She founded a nonprofit that provides athletic training and scholarships to underprivileged girls, helping thousands discover their potential through sports.",
        image: "LC",
        category: "Sports",
    },
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::builtin(Utc::now())
    }

    #[test]
    fn test_builtin_content_is_populated() {
        let content = store();
        assert_eq!(content.wellness_tips().len(), 5);
        assert_eq!(content.quotes().len(), 5);
        assert_eq!(content.reminders().len(), 3);
        assert_eq!(content.cycle().len(), 8);
        assert_eq!(content.helplines().len(), 4);
        assert_eq!(content.mentors().len(), 4);
        assert_eq!(content.community_posts().len(), 4);
        assert_eq!(content.stories().len(), 4);
    }

    #[test]
    fn test_budget_totals() {
        let budget = store().budget().clone();
        assert_eq!(budget.income.display(), "$5,000");
        assert_eq!(budget.total_expenses().display(), "$4,000");
        assert_eq!(budget.monthly_savings().display(), "$750");
    }

    #[test]
    fn test_expense_shares() {
        let content = store();
        let shares: Vec<_> = content.budget().expenses.iter().map(|e| e.share).collect();
        // 1500/4000 = 37.5 -> 38, 150/4000 = 3.75 -> 4
        assert_eq!(shares, [38, 15, 8, 5, 4, 19, 13]);
    }

    #[test]
    fn test_savings_goal_progress() {
        let content = store();
        let goal = &content.budget().savings_goal;
        assert_eq!(goal.progress(), 65);
        assert_eq!(goal.remaining().display(), "$3,500");
    }

    #[test]
    fn test_savings_goal_overshoot() {
        let goal = SavingsGoal {
            name: "Trip",
            target: Price::usd(100),
            current: Price::usd(150),
        };
        assert_eq!(goal.progress(), 100);
        assert_eq!(goal.remaining().display(), "$0");
    }

    #[test]
    fn test_percent_of_zero() {
        assert_eq!(percent(Decimal::ONE, Decimal::ZERO), 0);
    }

    #[test]
    fn test_story_lookup() {
        let content = store();
        assert_eq!(content.story(2).unwrap().name, "Maria Gonzalez");
        assert!(content.story(99).is_none());
    }

    #[test]
    fn test_topic_parse() {
        assert_eq!("career".parse::<Topic>().unwrap(), Topic::Career);
        assert_eq!("Relationships".parse::<Topic>().unwrap(), Topic::Relationships);
        assert!("All".parse::<Topic>().is_err());
    }

    #[test]
    fn test_own_post_rejects_blank_fields() {
        let now = Utc::now();
        assert!(CommunityPost::own("  ", "content", Topic::Career, now).is_none());
        assert!(CommunityPost::own("title", "\n", Topic::Career, now).is_none());

        let post = CommunityPost::own(" Hello ", "World", Topic::Finance, now).unwrap();
        assert_eq!(post.author, "You");
        assert_eq!(post.avatar, "YO");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.likes, 0);
        assert_eq!(post.time_ago(now), "Just now");
    }

    #[test]
    fn test_relative_time() {
        assert_eq!(relative_time(Duration::seconds(5)), "Just now");
        assert_eq!(relative_time(Duration::minutes(1)), "1 minute ago");
        assert_eq!(relative_time(Duration::minutes(42)), "42 minutes ago");
        assert_eq!(relative_time(Duration::hours(2)), "2 hours ago");
        assert_eq!(relative_time(Duration::days(1)), "1 day ago");
    }

    #[test]
    fn test_seed_posts_are_dated_from_startup() {
        let now = Utc::now();
        let content = ContentStore::builtin(now);
        let labels: Vec<_> = content
            .community_posts()
            .iter()
            .map(|p| p.time_ago(now))
            .collect();
        assert_eq!(labels, ["2 hours ago", "5 hours ago", "1 day ago", "2 days ago"]);
    }

    #[test]
    fn test_date_labels() {
        let content = store();
        assert_eq!(content.events().first().unwrap().date_label(), "March 15, 2024");
        assert_eq!(content.reminders().first().unwrap().date_label(), "Feb 15");
    }

    #[test]
    fn test_course_enrolled_label() {
        assert_eq!(store().courses().get(2).unwrap().enrolled_label(), "50,000");
    }

    #[test]
    fn test_helpline_tel_href() {
        assert_eq!(store().helplines().get(1).unwrap().tel_href(), "tel:18007997233");
    }
}
