//! English strings. Every key used by a page must be present here.

pub(super) static TABLE: &[(&str, &str)] = &[
    // General
    ("appName", "SheRise"),
    ("apply", "Apply"),
    ("continue", "Continue"),
    ("createAccount", "Create Account"),
    ("friend", "friend"),
    ("letsGo", "Let's Go!"),
    ("post", "Post"),
    ("signIn", "Sign In"),
    ("signOut", "Sign Out"),
    ("signUp", "Sign Up"),
    ("viewAll", "View All"),
    ("back", "Back"),
    // Navigation
    ("navHome", "Home"),
    ("navDashboard", "Dashboard"),
    ("navHealth", "Health"),
    ("navSafety", "Safety"),
    ("navCareer", "Career"),
    ("navCommunity", "Community"),
    ("navFinance", "Finance"),
    ("navStories", "Stories"),
    ("navProfile", "Profile"),
    ("navSettings", "Settings"),
    // Landing
    ("landingTagline", "Empowering women, every step of the way"),
    ("landingHeroTitle", "Rise, Thrive and"),
    ("landingHeroHighlight", "Shine Together"),
    (
        "landingHeroDescription",
        "Your all-in-one companion for health, safety, career growth, financial independence and a community that lifts you up.",
    ),
    ("landingGetStarted", "Get Started Free"),
    ("landingExploreFeatures", "Explore Features"),
    ("landingLogin", "Log In"),
    ("landingActiveUsers", "Active Users"),
    ("landingExpertMentors", "Expert Mentors"),
    ("landingSatisfaction", "Satisfaction"),
    ("landingFeaturesTitle", "Everything You Need to"),
    ("landingFeaturesHighlight", "Thrive"),
    (
        "landingFeaturesSubtitle",
        "Six pillars of support designed around the lives of real women.",
    ),
    ("landingCtaTitle", "Ready to Begin Your Journey?"),
    (
        "landingCtaDescription",
        "Join thousands of women who are already growing with SheRise.",
    ),
    ("landingCtaButton", "Join SheRise Today"),
    ("landingFooter", "Made with love for women everywhere."),
    // Features
    ("featureHealthTitle", "Health & Wellness"),
    (
        "featureHealthDesc",
        "Track your cycle, care for your mind and find routines that fit your day.",
    ),
    ("featureSafetyTitle", "Safety & Support"),
    (
        "featureSafetyDesc",
        "One-tap SOS, helplines and know-your-rights guides when you need them.",
    ),
    ("featureCareerTitle", "Career Growth"),
    (
        "featureCareerDesc",
        "Mentors, jobs and courses to help you build the career you want.",
    ),
    ("featureCommunityTitle", "Community"),
    (
        "featureCommunityDesc",
        "Share, ask and connect with women who understand.",
    ),
    ("featureFinanceTitle", "Financial Freedom"),
    (
        "featureFinanceDesc",
        "Budget with confidence and reach your savings goals.",
    ),
    ("featureStoriesTitle", "Success Stories"),
    (
        "featureStoriesDesc",
        "Real journeys from women who rose above the odds.",
    ),
    // Login / signup
    ("loginTitle", "Welcome Back"),
    ("loginSubtitle", "Sign in to continue your journey"),
    ("loginEmail", "Email"),
    ("loginPassword", "Password"),
    ("loginForgotPassword", "Forgot password?"),
    ("loginNoAccount", "Don't have an account?"),
    ("loginSignUpLink", "Sign up"),
    ("signupTitle", "Create Your Account"),
    ("signupSubtitle", "Start your journey with SheRise"),
    ("signupName", "Full Name"),
    ("signupEmail", "Email"),
    ("signupPassword", "Password"),
    ("signupHaveAccount", "Already have an account?"),
    ("signupSignInLink", "Sign in"),
    ("errorEmail", "Please enter a valid email address."),
    ("errorName", "Please enter your name."),
    // Onboarding
    ("onboardingLanguageTitle", "Choose Your Language"),
    (
        "onboardingLanguageSubtitle",
        "You can change this any time in settings.",
    ),
    ("onboardingInterestsTitle", "What Interests You?"),
    (
        "onboardingInterestsSubtitle",
        "Pick the topics you care about. We'll tailor your experience.",
    ),
    ("onboardingCompleteTitle", "You're All Set!"),
    (
        "onboardingCompleteSubtitle",
        "Your personalised SheRise experience is ready.",
    ),
    ("onboardingPersonalized", "Personalised for you:"),
    ("onboardingAllTopics", "All topics"),
    ("onboardingStep", "Step"),
    ("interestHealth", "Health & Wellness"),
    ("interestCareer", "Career Growth"),
    ("interestSafety", "Safety"),
    ("interestFinance", "Finance"),
    ("interestCommunity", "Community"),
    // Dashboard
    ("dashboardWelcome", "Welcome back"),
    ("dashboardSubtitle", "Here's what's happening today"),
    ("dashboardWellnessTip", "Wellness Tip of the Day"),
    ("dashboardUpcoming", "Upcoming"),
    ("dashboardDailyInspiration", "Daily Inspiration"),
    ("dashboardHealthHub", "Health Hub"),
    ("dashboardHealthDesc", "Cycle, mind and fitness"),
    ("dashboardSafetySupport", "Safety Support"),
    ("dashboardSafetyDesc", "SOS and helplines"),
    ("dashboardCareer", "Career"),
    ("dashboardCareerDesc", "Mentors, jobs and courses"),
    ("dashboardCommunity", "Community"),
    ("dashboardCommunityDesc", "Connect and share"),
    ("dashboardFinance", "Finance"),
    ("dashboardFinanceDesc", "Budget and savings"),
    ("dashboardStories", "Stories"),
    ("dashboardStoriesDesc", "Get inspired"),
    // Health
    ("healthTitle", "Health & Wellness"),
    ("healthSubtitle", "Take care of your body and mind"),
    ("healthCycleTracker", "Cycle Tracker"),
    ("healthMenstrual", "Menstrual"),
    ("healthFollicular", "Follicular"),
    ("healthOvulation", "Ovulation"),
    ("healthLuteal", "Luteal"),
    ("healthPreMenstrual", "Pre-menstrual"),
    ("healthEnergy", "Energy"),
    ("healthMood", "Mood"),
    ("healthDay", "Day"),
    ("healthMentalWellness", "Mental Wellness"),
    ("healthFitnessRoutines", "Fitness Routines"),
    ("healthResources", "Health Resources"),
    ("healthRead", "read"),
    // Safety
    ("safetyTitle", "Safety & Support"),
    ("safetySubtitle", "Help is always one tap away"),
    ("safetyEmergency", "Emergency SOS"),
    (
        "safetyEmergencyDesc",
        "Press the button to alert your emergency contacts and share your location.",
    ),
    ("safetySos", "SOS"),
    ("safetyAlertTitle", "Alert Sent!"),
    (
        "safetyAlertDesc",
        "Your emergency contacts have been notified with your location.",
    ),
    (
        "safetyAlertNote",
        "This is a demo. No real alert was sent. In an emergency call your local emergency number.",
    ),
    ("safetyCloseAlert", "Close"),
    ("safetyHelplines", "Helplines"),
    ("safetyLegalRights", "Know Your Rights"),
    ("safetySafetyTips", "Safety Tips"),
    // Career
    ("careerTitle", "Career Growth"),
    ("careerSubtitle", "Find mentors, jobs and skills for your future"),
    ("careerMentors", "Mentors"),
    ("careerJobs", "Jobs"),
    ("careerCourses", "Courses"),
    ("careerEvents", "Networking Events"),
    ("careerEnrolled", "enrolled"),
    ("careerAttendees", "attending"),
    // Community
    ("communityTitle", "Community"),
    ("communitySubtitle", "A safe space to share and support"),
    ("communityNewPost", "New Post"),
    ("communityCreatePost", "Create a Post"),
    (
        "communityCreatePostDesc",
        "Share your thoughts, questions or wins with the community.",
    ),
    ("communityPostTitle", "Title"),
    ("communityPostContent", "What's on your mind?"),
    ("communityAll", "All"),
    ("communityHealth", "Health"),
    ("communityCareer", "Career"),
    ("communityFinance", "Finance"),
    ("communityRelationships", "Relationships"),
    ("communityEducation", "Education"),
    ("communityLifestyle", "Lifestyle"),
    ("communityComments", "comments"),
    ("communityLikes", "likes"),
    ("communityTopic", "Topic"),
    ("communityEmpty", "No posts in this topic yet."),
    // Finance
    ("financeTitle", "Financial Freedom"),
    ("financeSubtitle", "Plan, save and grow your money"),
    ("financeIncome", "Income"),
    ("financeExpenses", "Expenses"),
    ("financeSavings", "Savings"),
    ("financeBudget", "Budget Breakdown"),
    ("financeSavingsGoal", "Savings Goal"),
    ("financeComplete", "complete"),
    ("financeOf", "of"),
    ("financeToGo", "to go"),
    ("financeMonthlyContribution", "Monthly contribution"),
    ("financeMonth", "/month"),
    ("financeAutoSave", "Auto-save enabled"),
    ("financeTips", "Financial Tips"),
    // Stories
    ("storiesTitle", "Success Stories"),
    ("storiesSubtitle", "Real women, real journeys"),
    ("storiesReadFull", "Read Full Story"),
    ("storiesShare", "Share Story"),
    (
        "storiesQuote",
        "Every woman's success should be an inspiration to another.",
    ),
    // Profile
    ("profileMemberSince", "Member since 2026"),
    ("profileInterests", "Your Interests"),
    ("profileNoInterests", "No interests selected yet."),
    ("profileQuickLinks", "Quick Links"),
    // Settings
    ("settingsTitle", "Settings"),
    ("settingsSubtitle", "Make SheRise work for you"),
    ("settingsLanguage", "Language"),
    ("settingsAppearance", "Appearance"),
    ("settingsDarkMode", "Dark Mode"),
    ("settingsDarkModeDesc", "Easier on the eyes at night"),
    ("settingsAccessibility", "Accessibility"),
    ("settingsHighContrast", "High Contrast"),
    ("settingsHighContrastDesc", "Stronger colours for better readability"),
    ("settingsFontSize", "Font Size"),
    ("settingsFontSizeDesc", "Adjust text size across the app"),
    ("settingsAbout", "About"),
    ("settingsOn", "On"),
    ("settingsOff", "Off"),
    // Not found
    ("notFoundTitle", "Oops! This page seems to have wandered off."),
    ("notFoundBack", "Back to Home"),
];
