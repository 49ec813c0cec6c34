use clap::ValueEnum;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// ========================================
/// Request/Result data model
/// ========================================

/// The two product skins sharing one core.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Academic,
    Social,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "Project Ideas")]
    #[value(alias = "ideas")]
    ProjectIdeas,
    #[serde(rename = "Project Report")]
    #[value(alias = "report")]
    ProjectReport,
    #[serde(rename = "Assignment Solution")]
    #[value(alias = "assignment")]
    AssignmentSolution,
    #[serde(rename = "Viral Post")]
    #[value(alias = "post")]
    ViralPost,
    #[serde(rename = "Story Caption")]
    #[value(alias = "caption")]
    StoryCaption,
    #[serde(rename = "Video Script")]
    #[value(alias = "script")]
    VideoScript,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::ProjectIdeas,
        ContentType::ProjectReport,
        ContentType::AssignmentSolution,
        ContentType::ViralPost,
        ContentType::StoryCaption,
        ContentType::VideoScript,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::ProjectIdeas => "Project Ideas",
            ContentType::ProjectReport => "Project Report",
            ContentType::AssignmentSolution => "Assignment Solution",
            ContentType::ViralPost => "Viral Post",
            ContentType::StoryCaption => "Story Caption",
            ContentType::VideoScript => "Video Script",
        }
    }

    pub fn variant(self) -> Variant {
        match self {
            ContentType::ProjectIdeas
            | ContentType::ProjectReport
            | ContentType::AssignmentSolution => Variant::Academic,
            ContentType::ViralPost | ContentType::StoryCaption | ContentType::VideoScript => {
                Variant::Social
            }
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    // academic
    Professional,
    Academic,
    Creative,
    Technical,
    Detailed,
    // social
    Funny,
    Emotional,
    Inspirational,
    Casual,
    Dramatic,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Academic => "Academic",
            Tone::Creative => "Creative",
            Tone::Technical => "Technical",
            Tone::Detailed => "Detailed",
            Tone::Funny => "Funny",
            Tone::Emotional => "Emotional",
            Tone::Inspirational => "Inspirational",
            Tone::Casual => "Casual",
            Tone::Dramatic => "Dramatic",
        }
    }

    pub fn variant(self) -> Variant {
        match self {
            Tone::Professional | Tone::Academic | Tone::Creative | Tone::Technical | Tone::Detailed => {
                Variant::Academic
            }
            Tone::Funny | Tone::Emotional | Tone::Inspirational | Tone::Casual | Tone::Dramatic => {
                Variant::Social
            }
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    Students,
    Researchers,
    Professionals,
    Beginners,
    Advanced,
    #[serde(rename = "Gen Z")]
    #[value(name = "gen-z")]
    GenZ,
    #[serde(rename = "Young Adults")]
    YoungAdults,
    Parents,
    Entrepreneurs,
    #[serde(rename = "General Public")]
    GeneralPublic,
}

impl Audience {
    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Students => "Students",
            Audience::Researchers => "Researchers",
            Audience::Professionals => "Professionals",
            Audience::Beginners => "Beginners",
            Audience::Advanced => "Advanced",
            Audience::GenZ => "Gen Z",
            Audience::YoungAdults => "Young Adults",
            Audience::Parents => "Parents",
            Audience::Entrepreneurs => "Entrepreneurs",
            Audience::GeneralPublic => "General Public",
        }
    }

    /// `None` for audiences offered by both products.
    pub fn variant(self) -> Option<Variant> {
        match self {
            Audience::Professionals => None,
            Audience::Students | Audience::Researchers | Audience::Beginners | Audience::Advanced => {
                Some(Variant::Academic)
            }
            Audience::GenZ
            | Audience::YoungAdults
            | Audience::Parents
            | Audience::Entrepreneurs
            | Audience::GeneralPublic => Some(Variant::Social),
        }
    }

    pub fn fits(self, variant: Variant) -> bool {
        self.variant().map_or(true, |v| v == variant)
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text knobs that differ between the two skins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum RequestDetails {
    Academic {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        additional_details: Option<String>,
    },
    Social {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        word_count: Option<u32>,
        #[serde(default)]
        include_hashtags: bool,
        #[serde(default)]
        include_emojis: bool,
    },
}

/// One form submission. The caller guarantees `topic` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    pub topic: String,
    pub content_type: ContentType,
    pub tone: Tone,
    pub audience: Audience,
    pub details: RequestDetails,
}

impl ContentRequest {
    pub fn variant(&self) -> Variant {
        self.content_type.variant()
    }
}

/// Structured record handed to the presentation layer. Serialized with the
/// variant's own key names, see [`ContentResult::labels`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContentResult {
    pub content_type: ContentType,
    pub title: String,
    /// Passed through untouched; may carry `#` headings, `>` quotes, list
    /// prefixes and `#hashtag` tokens for the renderer.
    pub content: String,
    pub sections: Vec<String>,
    pub keywords: Vec<String>,
    pub tips: Vec<String>,
    pub estimate: String,
}

/// Display names of the variant-specific fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabels {
    pub tips: &'static str,
    pub estimate: &'static str,
}

impl ContentResult {
    pub fn labels(&self) -> FieldLabels {
        match self.content_type.variant() {
            Variant::Academic => FieldLabels { tips: "tips", estimate: "estimatedLength" },
            Variant::Social => FieldLabels { tips: "engagementTips", estimate: "estimatedReach" },
        }
    }
}

impl Serialize for ContentResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let labels = self.labels();
        let mut st = serializer.serialize_struct("ContentResult", 7)?;
        st.serialize_field("type", &self.content_type)?;
        st.serialize_field("title", &self.title)?;
        st.serialize_field("content", &self.content)?;
        st.serialize_field("sections", &self.sections)?;
        st.serialize_field("keywords", &self.keywords)?;
        st.serialize_field(labels.tips, &self.tips)?;
        st.serialize_field(labels.estimate, &self.estimate)?;
        st.end()
    }
}
