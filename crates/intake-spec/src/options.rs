use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed single-choice set for the kind of website being requested.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WebsiteType {
    OnlineStore,
    BusinessProfile,
    SchoolSystem,
    BookingSystem,
    Portfolio,
    NewsSite,
    Other,
    NotSureSuggest,
}

impl WebsiteType {
    pub const ALL: &'static [WebsiteType] = &[
        WebsiteType::OnlineStore,
        WebsiteType::BusinessProfile,
        WebsiteType::SchoolSystem,
        WebsiteType::BookingSystem,
        WebsiteType::Portfolio,
        WebsiteType::NewsSite,
        WebsiteType::Other,
        WebsiteType::NotSureSuggest,
    ];

    /// Human label, also the value persisted in the external schema.
    pub fn label(&self) -> &'static str {
        match self {
            WebsiteType::OnlineStore => "Online store",
            WebsiteType::BusinessProfile => "Business profile",
            WebsiteType::SchoolSystem => "School system",
            WebsiteType::BookingSystem => "Booking system",
            WebsiteType::Portfolio => "Portfolio",
            WebsiteType::NewsSite => "News site",
            WebsiteType::Other => "Other",
            WebsiteType::NotSureSuggest => "I'm not sure – suggest",
        }
    }
}

/// Multi-choice feature checklist.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ContactForm,
    WhatsappChat,
    Payments,
    Booking,
    Blog,
    Gallery,
    LoginSystem,
    MultiLanguage,
    Newsletter,
    Search,
    Other,
    NotSureRecommend,
}

impl Feature {
    pub const ALL: &'static [Feature] = &[
        Feature::ContactForm,
        Feature::WhatsappChat,
        Feature::Payments,
        Feature::Booking,
        Feature::Blog,
        Feature::Gallery,
        Feature::LoginSystem,
        Feature::MultiLanguage,
        Feature::Newsletter,
        Feature::Search,
        Feature::Other,
        Feature::NotSureRecommend,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::ContactForm => "Contact form",
            Feature::WhatsappChat => "WhatsApp chat",
            Feature::Payments => "Payments",
            Feature::Booking => "Booking",
            Feature::Blog => "Blog",
            Feature::Gallery => "Gallery",
            Feature::LoginSystem => "Login system",
            Feature::MultiLanguage => "Multi-language",
            Feature::Newsletter => "Newsletter",
            Feature::Search => "Search",
            Feature::Other => "Other",
            Feature::NotSureRecommend => "I'm not sure – recommend",
        }
    }
}

/// Whether the requester already has branding materials.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Branding {
    HasMaterials,
    NeedsDesign,
    Unsure,
}

impl Branding {
    pub const ALL: &'static [Branding] =
        &[Branding::HasMaterials, Branding::NeedsDesign, Branding::Unsure];

    pub fn label(&self) -> &'static str {
        match self {
            Branding::HasMaterials => "Yes – I'll upload",
            Branding::NeedsDesign => "No – design for me",
            Branding::Unsure => "Not sure",
        }
    }
}

/// Multi-choice design style preferences.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DesignStyle {
    Modern,
    Bold,
    Minimal,
    Creative,
    Professional,
    ShowOptions,
}

impl DesignStyle {
    pub const ALL: &'static [DesignStyle] = &[
        DesignStyle::Modern,
        DesignStyle::Bold,
        DesignStyle::Minimal,
        DesignStyle::Creative,
        DesignStyle::Professional,
        DesignStyle::ShowOptions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DesignStyle::Modern => "Modern",
            DesignStyle::Bold => "Bold",
            DesignStyle::Minimal => "Minimal",
            DesignStyle::Creative => "Creative",
            DesignStyle::Professional => "Professional",
            DesignStyle::ShowOptions => "Show options",
        }
    }
}

/// Requested delivery window.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Asap,
    WithinOneMonth,
    WithinThreeMonths,
    WithinSixMonths,
    NotSure,
}

impl Timeline {
    pub const ALL: &'static [Timeline] = &[
        Timeline::Asap,
        Timeline::WithinOneMonth,
        Timeline::WithinThreeMonths,
        Timeline::WithinSixMonths,
        Timeline::NotSure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Asap => "ASAP",
            Timeline::WithinOneMonth => "Within 1 month",
            Timeline::WithinThreeMonths => "Within 3 months",
            Timeline::WithinSixMonths => "Within 6 months",
            Timeline::NotSure => "Not sure",
        }
    }
}

/// Budget bands in KES.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    Under100k,
    From100kTo300k,
    From300kTo500k,
    From500kTo1m,
    Over1m,
    NotSure,
}

impl BudgetRange {
    pub const ALL: &'static [BudgetRange] = &[
        BudgetRange::Under100k,
        BudgetRange::From100kTo300k,
        BudgetRange::From300kTo500k,
        BudgetRange::From500kTo1m,
        BudgetRange::Over1m,
        BudgetRange::NotSure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Under100k => "Under KES 100,000",
            BudgetRange::From100kTo300k => "KES 100,000 - KES 300,000",
            BudgetRange::From300kTo500k => "KES 300,000 - KES 500,000",
            BudgetRange::From500kTo1m => "KES 500,000 - KES 1,000,000",
            BudgetRange::Over1m => "Over KES 1,000,000",
            BudgetRange::NotSure => "Not sure",
        }
    }
}

/// How the requester prefers to pay.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    FullAmount,
    LipaMdogoMdogo,
}

impl PaymentMethod {
    pub const ALL: &'static [PaymentMethod] =
        &[PaymentMethod::FullAmount, PaymentMethod::LipaMdogoMdogo];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::FullAmount => "Pay full amount",
            PaymentMethod::LipaMdogoMdogo => "Lipa Mdogo Mdogo",
        }
    }
}
