//! Hindi strings. Keys missing here fall back to English.

pub(super) static TABLE: &[(&str, &str)] = &[
    ("appName", "SheRise"),
    ("apply", "आवेदन करें"),
    ("continue", "जारी रखें"),
    ("createAccount", "खाता बनाएं"),
    ("friend", "दोस्त"),
    ("letsGo", "चलिए शुरू करें!"),
    ("post", "पोस्ट करें"),
    ("signIn", "साइन इन करें"),
    ("signOut", "साइन आउट करें"),
    ("signUp", "साइन अप करें"),
    ("viewAll", "सभी देखें"),
    ("back", "वापस"),
    ("navHome", "होम"),
    ("navDashboard", "डैशबोर्ड"),
    ("navHealth", "स्वास्थ्य"),
    ("navSafety", "सुरक्षा"),
    ("navCareer", "करियर"),
    ("navCommunity", "समुदाय"),
    ("navFinance", "वित्त"),
    ("navStories", "कहानियाँ"),
    ("navProfile", "प्रोफ़ाइल"),
    ("navSettings", "सेटिंग्स"),
    ("landingTagline", "हर कदम पर महिलाओं का सशक्तिकरण"),
    ("landingGetStarted", "मुफ़्त में शुरू करें"),
    ("landingLogin", "लॉग इन करें"),
    ("landingCtaButton", "आज ही SheRise से जुड़ें"),
    ("loginTitle", "फिर से स्वागत है"),
    ("loginEmail", "ईमेल"),
    ("loginPassword", "पासवर्ड"),
    ("signupTitle", "अपना खाता बनाएं"),
    ("signupName", "पूरा नाम"),
    ("signupEmail", "ईमेल"),
    ("signupPassword", "पासवर्ड"),
    ("errorEmail", "कृपया एक मान्य ईमेल पता दर्ज करें।"),
    ("errorName", "कृपया अपना नाम दर्ज करें।"),
    ("onboardingLanguageTitle", "अपनी भाषा चुनें"),
    ("onboardingInterestsTitle", "आपकी रुचि किसमें है?"),
    ("onboardingCompleteTitle", "आप पूरी तरह तैयार हैं!"),
    ("interestHealth", "स्वास्थ्य और कल्याण"),
    ("interestCareer", "करियर विकास"),
    ("interestSafety", "सुरक्षा"),
    ("interestFinance", "वित्त"),
    ("interestCommunity", "समुदाय"),
    ("dashboardWelcome", "फिर से स्वागत है"),
    ("dashboardSubtitle", "आज क्या हो रहा है"),
    ("dashboardWellnessTip", "आज का स्वास्थ्य सुझाव"),
    ("dashboardUpcoming", "आगामी"),
    ("dashboardDailyInspiration", "दैनिक प्रेरणा"),
    ("healthTitle", "स्वास्थ्य और कल्याण"),
    ("healthCycleTracker", "चक्र ट्रैकर"),
    ("healthMentalWellness", "मानसिक स्वास्थ्य"),
    ("safetyTitle", "सुरक्षा और सहायता"),
    ("safetyEmergency", "आपातकालीन SOS"),
    ("safetyAlertTitle", "अलर्ट भेजा गया!"),
    ("safetyCloseAlert", "बंद करें"),
    ("safetyHelplines", "हेल्पलाइन"),
    ("safetyLegalRights", "अपने अधिकार जानें"),
    ("careerTitle", "करियर विकास"),
    ("careerMentors", "मेंटर"),
    ("careerJobs", "नौकरियाँ"),
    ("careerCourses", "पाठ्यक्रम"),
    ("communityTitle", "समुदाय"),
    ("communityNewPost", "नई पोस्ट"),
    ("communityAll", "सभी"),
    ("financeTitle", "वित्तीय स्वतंत्रता"),
    ("financeIncome", "आय"),
    ("financeExpenses", "खर्च"),
    ("financeSavings", "बचत"),
    ("financeSavingsGoal", "बचत लक्ष्य"),
    ("storiesTitle", "सफलता की कहानियाँ"),
    ("storiesReadFull", "पूरी कहानी पढ़ें"),
    ("profileInterests", "आपकी रुचियाँ"),
    ("settingsTitle", "सेटिंग्स"),
    ("settingsLanguage", "भाषा"),
    ("settingsDarkMode", "डार्क मोड"),
    ("settingsHighContrast", "उच्च कंट्रास्ट"),
    ("settingsFontSize", "फ़ॉन्ट आकार"),
    ("settingsOn", "चालू"),
    ("settingsOff", "बंद"),
    ("notFoundBack", "होम पर वापस जाएं"),
];
