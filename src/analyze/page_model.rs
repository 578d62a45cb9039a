use serde::Serialize;

// ============================================================================
// Element descriptors — normalized snapshots of one element's attributes
// ============================================================================

/// Validation constraints pulled verbatim from a field's attributes.
/// Absent attributes are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    pub pattern: String,
    pub min_length: String,
    pub max_length: String,
    pub min: String,
    pub max: String,
}

impl FieldValidation {
    /// True when no validation attribute is present.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
            && self.min_length.is_empty()
            && self.max_length.is_empty()
            && self.min.is_empty()
            && self.max.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub field_type: String,
    pub name: String,
    pub id: String,
    pub placeholder: String,
    pub required: bool,
    pub validation: FieldValidation,
    /// Field-purpose taxonomy category, assigned by the analyzer.
    pub purpose: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormComplexity {
    Simple,
    Medium,
    Complex,
}

impl FormComplexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormComplexity::Simple => "simple",
            FormComplexity::Medium => "medium",
            FormComplexity::Complex => "complex",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDescriptor {
    pub id: String,
    pub name: String,
    /// Submission target; the analyzer substitutes the page identifier
    /// when the markup leaves it empty.
    pub action: String,
    /// Upper-cased method, `GET` when omitted.
    pub method: String,
    pub fields: Vec<FieldDescriptor>,
    /// Form-purpose taxonomy category, assigned by the analyzer.
    pub purpose: String,
    pub complexity: FormComplexity,
}

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavType {
    MainNavigation,
    Breadcrumb,
    Sidebar,
    Footer,
    General,
}

impl NavType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavType::MainNavigation => "main_navigation",
            NavType::Breadcrumb => "breadcrumb",
            NavType::Sidebar => "sidebar",
            NavType::Footer => "footer",
            NavType::General => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavStructure {
    /// Nesting depth of list elements inside the group.
    pub depth: usize,
    /// Number of links in the group.
    pub breadth: usize,
    pub hierarchical: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationDescriptor {
    pub id: String,
    pub nav_type: NavType,
    pub links: Vec<NavLink>,
    pub structure: NavStructure,
}

// ============================================================================
// Interactive elements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonPurpose {
    Submit,
    Cancel,
    Delete,
    Edit,
    General,
}

impl ButtonPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonPurpose::Submit => "submit",
            ButtonPurpose::Cancel => "cancel",
            ButtonPurpose::Delete => "delete",
            ButtonPurpose::Edit => "edit",
            ButtonPurpose::General => "general",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Danger,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonDescriptor {
    pub id: String,
    pub name: String,
    pub text: String,
    pub html_type: String,
    pub purpose: ButtonPurpose,
    pub style: ButtonStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkPurpose {
    Home,
    About,
    Contact,
    Login,
    Register,
    General,
}

impl LinkPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkPurpose::Home => "home",
            LinkPurpose::About => "about",
            LinkPurpose::Contact => "contact",
            LinkPurpose::Login => "login",
            LinkPurpose::Register => "register",
            LinkPurpose::General => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDescriptor {
    pub text: String,
    pub href: String,
    pub purpose: LinkPurpose,
    pub external: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalPurpose {
    Confirmation,
    Alert,
    FormDialog,
    General,
}

impl ModalPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalPurpose::Confirmation => "confirmation",
            ModalPurpose::Alert => "alert",
            ModalPurpose::FormDialog => "form_dialog",
            ModalPurpose::General => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalDescriptor {
    pub id: String,
    pub purpose: ModalPurpose,
    pub has_close: bool,
}

// ============================================================================
// Data structures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    pub row_count: usize,
    pub column_count: usize,
    pub has_headers: bool,
    /// Contains a button, link, or input somewhere inside.
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListDescriptor {
    pub ordered: bool,
    pub item_count: usize,
    pub nested: bool,
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    ProductCard,
    UserCard,
    ContentCard,
    GeneralCard,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::ProductCard => "product_card",
            CardType::UserCard => "user_card",
            CardType::ContentCard => "content_card",
            CardType::GeneralCard => "general_card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDescriptor {
    pub id: String,
    pub card_type: CardType,
    pub element_count: usize,
    pub interactive: bool,
    pub has_image: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentAreaDescriptor {
    /// Landmark tag: main, header, footer, article, section, aside.
    pub area: String,
    /// Text of the first heading inside, or empty.
    pub heading: String,
    pub word_count: usize,
}

// ============================================================================
// Analysis result — one per page
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InteractiveInventory {
    pub buttons: Vec<ButtonDescriptor>,
    pub links: Vec<LinkDescriptor>,
    pub inputs: Vec<FieldDescriptor>,
    pub modals: Vec<ModalDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataStructures {
    pub tables: Vec<TableDescriptor>,
    pub lists: Vec<ListDescriptor>,
    pub cards: Vec<CardDescriptor>,
}

/// Classified structural profile of one page. Built fresh per `analyze`
/// call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub website_type: String,
    pub forms: Vec<FormDescriptor>,
    pub navigation: Vec<NavigationDescriptor>,
    pub content_areas: Vec<ContentAreaDescriptor>,
    pub interactive: InteractiveInventory,
    pub data_structures: DataStructures,
}
