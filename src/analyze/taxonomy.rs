// ============================================================================
// Keyword taxonomy — static category → keyword tables
// ============================================================================

/// Name returned when no category scores above zero.
pub const GENERAL: &str = "general";

/// One named category with its ordered keyword triggers.
///
/// Categories live in plain slices: declaration order doubles as the
/// classifier's tie-break order, so nothing here may depend on map or set
/// iteration.
#[derive(Debug, Clone, Copy)]
pub struct TaxonomyCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Website-type categories, scored against page text plus the page
/// identifier.
pub fn website_types() -> &'static [TaxonomyCategory] {
    &[
        TaxonomyCategory {
            name: "e_commerce",
            keywords: &[
                "cart", "checkout", "product", "price", "buy", "shop", "order", "shipping",
            ],
        },
        TaxonomyCategory {
            name: "blog",
            keywords: &["blog", "post", "article", "comment", "author", "read more"],
        },
        TaxonomyCategory {
            name: "social_media",
            keywords: &["follow", "share", "like", "friend", "feed", "timeline"],
        },
        TaxonomyCategory {
            name: "news",
            keywords: &["news", "headline", "breaking", "editorial", "press"],
        },
        TaxonomyCategory {
            name: "educational",
            keywords: &["course", "lesson", "learn", "tutorial", "quiz", "student"],
        },
        TaxonomyCategory {
            name: "corporate",
            keywords: &["services", "solutions", "company", "team", "clients", "careers"],
        },
        TaxonomyCategory {
            name: "portfolio",
            keywords: &["portfolio", "projects", "resume", "skills", "showcase"],
        },
        TaxonomyCategory {
            name: "web_application",
            keywords: &["dashboard", "settings", "account", "logout", "admin", "workspace"],
        },
    ]
}

/// Form-purpose categories, scored against a form's text plus its
/// serialized markup.
pub fn form_purposes() -> &'static [TaxonomyCategory] {
    &[
        TaxonomyCategory {
            name: "login_forms",
            keywords: &["login", "log in", "sign in", "signin", "username", "password"],
        },
        TaxonomyCategory {
            name: "registration_forms",
            keywords: &[
                "register",
                "sign up",
                "signup",
                "create account",
                "join",
                "confirm password",
            ],
        },
        TaxonomyCategory {
            name: "search_forms",
            keywords: &["search", "query", "find", "filter"],
        },
        TaxonomyCategory {
            name: "contact_forms",
            keywords: &["contact", "message", "subject", "inquiry", "feedback"],
        },
        TaxonomyCategory {
            name: "checkout_forms",
            keywords: &["checkout", "payment", "card number", "billing", "shipping address"],
        },
        TaxonomyCategory {
            name: "subscription_forms",
            keywords: &["subscribe", "newsletter", "updates", "mailing list"],
        },
        TaxonomyCategory {
            name: "upload_forms",
            keywords: &["upload", "file", "attachment", "browse"],
        },
    ]
}

/// Field-purpose categories, scored against a field's concatenated
/// attribute values.
pub fn field_purposes() -> &'static [TaxonomyCategory] {
    &[
        TaxonomyCategory {
            name: "email",
            keywords: &["email", "e-mail"],
        },
        TaxonomyCategory {
            name: "password",
            keywords: &["password", "pwd"],
        },
        TaxonomyCategory {
            name: "username",
            keywords: &["username", "user name", "login"],
        },
        TaxonomyCategory {
            name: "phone",
            keywords: &["phone", "tel", "mobile"],
        },
        TaxonomyCategory {
            name: "name",
            keywords: &["name", "first", "last", "surname"],
        },
        TaxonomyCategory {
            name: "address",
            keywords: &["address", "street", "city", "zip", "postal"],
        },
        TaxonomyCategory {
            name: "date",
            keywords: &["date", "birthday", "dob"],
        },
        TaxonomyCategory {
            name: "search",
            keywords: &["search", "query"],
        },
        TaxonomyCategory {
            name: "number",
            keywords: &["number", "amount", "quantity", "age"],
        },
        TaxonomyCategory {
            name: "message",
            keywords: &["message", "comment", "description", "notes"],
        },
        TaxonomyCategory {
            name: "url",
            keywords: &["url", "website", "link"],
        },
    ]
}
