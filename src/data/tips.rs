//! Static travel tips served by `/api/trips/travel-tips/{destination}`.

pub const GENERAL: &[&str] = &[
    "Best time to visit: October to March",
    "Local currency: Indian Rupee (INR)",
    "Language: English and local languages",
    "Visa: Check requirements based on your nationality",
];

pub const ACCOMMODATION: &[&str] = &[
    "Book hotels in advance during peak season",
    "Consider homestays for authentic experience",
    "Check for amenities like WiFi and AC",
    "Read recent reviews before booking",
];

pub const TRANSPORTATION: &[&str] = &[
    "Use local transport for short distances",
    "Book trains in advance (IRCTC)",
    "Consider domestic flights for long distances",
    "Use ride-sharing apps in major cities",
];

pub const FOOD: &[&str] = &[
    "Try local street food (ensure hygiene)",
    "Drink bottled water",
    "Sample regional specialties",
    "Check for vegetarian options",
];

pub const ACTIVITIES: &[&str] = &[
    "Visit historical monuments early morning",
    "Book guided tours for better experience",
    "Respect local customs and dress codes",
    "Carry necessary permits for restricted areas",
];
