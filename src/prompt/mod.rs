use crate::wire::{ContentRequest, ContentType, RequestDetails, Variant};

pub const TOPIC: &str = "{{TOPIC}}";
pub const TONE: &str = "{{TONE}}";
pub const AUDIENCE: &str = "{{AUDIENCE}}";
pub const DETAILS: &str = "{{DETAILS}}";

pub const NO_DETAILS: &str = "No additional details provided";

/// Paired delimiter the model is told to echo around one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub start: &'static str,
    pub end: &'static str,
    pub hint: &'static str,
}

pub const TITLE: Marker = Marker {
    start: "CONTENT_TITLE_START",
    end: "CONTENT_TITLE_END",
    hint: "[Write the title here]",
};
pub const BODY: Marker = Marker {
    start: "CONTENT_BODY_START",
    end: "CONTENT_BODY_END",
    hint: "[Write the main content here with all sections]",
};
pub const SECTIONS: Marker = Marker {
    start: "SECTIONS_START",
    end: "SECTIONS_END",
    hint: "[List main section headings, one per line]",
};
pub const TIPS: Marker = Marker {
    start: "TIPS_START",
    end: "TIPS_END",
    hint: "[Provide 5-7 helpful tips related to this content]",
};
pub const ESTIMATED_LENGTH: Marker = Marker {
    start: "ESTIMATED_LENGTH_START",
    end: "ESTIMATED_LENGTH_END",
    hint: "[Estimated word count and reading time]",
};
pub const ENGAGEMENT_TIPS: Marker = Marker {
    start: "ENGAGEMENT_TIPS_START",
    end: "ENGAGEMENT_TIPS_END",
    hint: "[Provide 5-7 tips to boost likes, shares and comments, one per line]",
};
pub const ESTIMATED_REACH: Marker = Marker {
    start: "ESTIMATED_REACH_START",
    end: "ESTIMATED_REACH_END",
    hint: "[Estimated reach and engagement potential]",
};
pub const KEYWORDS: Marker = Marker {
    start: "KEYWORDS_START",
    end: "KEYWORDS_END",
    hint: "[Write keywords here, one per line]",
};

/// Every marker either contract can ask for.
pub const ALL_MARKERS: [Marker; 8] = [
    TITLE,
    BODY,
    SECTIONS,
    TIPS,
    ESTIMATED_LENGTH,
    ENGAGEMENT_TIPS,
    ESTIMATED_REACH,
    KEYWORDS,
];

/// Field markers of the content reply, in contract order:
/// title, body, sections, tips, estimate.
pub fn contract(variant: Variant) -> [Marker; 5] {
    match variant {
        Variant::Academic => [TITLE, BODY, SECTIONS, TIPS, ESTIMATED_LENGTH],
        Variant::Social => [TITLE, BODY, SECTIONS, ENGAGEMENT_TIPS, ESTIMATED_REACH],
    }
}

fn render_contract(markers: &[Marker]) -> String {
    let mut out = String::from("\n\nOutput in the following format:");
    for m in markers {
        out.push_str(&format!("\n\n{}\n{}\n{}", m.start, m.hint, m.end));
    }
    out
}

fn project_ideas() -> &'static str {
r#"
You are a creative project idea generator and innovation consultant.

Topic: "{{TOPIC}}"
Tone: {{TONE}}
Audience: {{AUDIENCE}}
Additional Details: {{DETAILS}}

Generate 5-7 unique and innovative project ideas related to the topic.

Structure:

🎯 **Introduction**:
- Brief overview of the topic domain
- Why these projects are relevant and valuable

💡 **Project Ideas** (5-7 ideas):
For each project idea include:
- Project Name (creative and memorable)
- Description (2-3 sentences)
- Key Features (3-4 bullet points)
- Technology Stack suggestion
- Difficulty Level (Beginner/Intermediate/Advanced)
- Estimated Timeline
- Impact & Value

🚀 **Implementation Tips**:
- Getting started advice
- Resources needed
- Common challenges to avoid

Special Instructions:
- Make ideas innovative and practical
- Consider current trends and technologies
- Ensure feasibility for the target audience
- Include real-world applications
"#
}

fn project_report() -> &'static str {
r#"
You are an expert academic writer and project documentation specialist.

Topic: "{{TOPIC}}"
Tone: {{TONE}}
Audience: {{AUDIENCE}}
Additional Details: {{DETAILS}}

Create a comprehensive project report with the following structure:

📋 **Title & Abstract**:
- Compelling project title
- Executive summary (150-200 words)
- Key objectives and outcomes

🎯 **Introduction**:
- Background and context
- Problem statement
- Project objectives
- Scope and limitations

🔍 **Literature Review / Background Research**:
- Current state of the field
- Related work and existing solutions
- Research gaps identified

⚙️ **Methodology**:
- Approach and framework
- Tools and technologies used
- Implementation process
- System architecture/design

📊 **Results & Analysis**:
- Key findings and outcomes
- Data analysis and interpretation
- Performance metrics
- Comparative analysis

💡 **Discussion**:
- Interpretation of results
- Implications and significance
- Challenges faced and solutions
- Future improvements

🎬 **Conclusion**:
- Summary of achievements
- Contribution to the field
- Recommendations
- Future scope

📚 **References & Resources**:
- Suggested reading materials
- Tools and frameworks

Special Instructions:
- Use formal academic language
- Include specific details and examples
- Make it publication-ready
- Ensure logical flow between sections
"#
}

fn assignment_solution() -> &'static str {
r#"
You are an expert educator and assignment solution provider.

Topic: "{{TOPIC}}"
Tone: {{TONE}}
Audience: {{AUDIENCE}}
Additional Details: {{DETAILS}}

Create a comprehensive assignment solution with deep explanations:

📝 **Assignment Overview**:
- Understanding the question/problem
- Key concepts involved
- Learning objectives

💡 **Theoretical Foundation**:
- Core concepts explanation
- Relevant theories and principles
- Background knowledge needed

🔬 **Step-by-Step Solution**:
- Break down the problem
- Detailed solution process
- Each step explained thoroughly
- Formulas/algorithms used
- Code snippets (if applicable)
- Diagrams and examples

📊 **Analysis & Verification**:
- Result validation
- Alternative approaches
- Comparison of methods
- Error analysis

🎯 **Key Takeaways**:
- Important points to remember
- Common mistakes to avoid
- Best practices
- Related concepts

📚 **Practice & Extension**:
- Similar problems to practice
- Advanced variations
- Real-world applications
- Further study resources

🌟 **Study Tips**:
- How to master this topic
- Effective learning strategies
- Resources for deeper understanding

Special Instructions:
- Explain every step clearly
- Use examples and analogies
- Include visual descriptions
- Make it easy to understand
- Provide complete, detailed solutions
- Focus on learning, not just answers
"#
}

fn viral_post() -> &'static str {
r#"
You are a viral social media copywriter who writes natural, engaging Bangla content.

Topic: "{{TOPIC}}"
Tone: {{TONE}}
Audience: {{AUDIENCE}}
Preferences:
{{DETAILS}}

Write one scroll-stopping social media post about the topic, in Bangla.

Structure:

🔥 **Hook**:
- One or two opening lines that stop the scroll
- Curiosity, surprise or strong emotion

📖 **Body**:
- Short paragraphs (1-3 lines each)
- A relatable story, fact or insight
- Line breaks for readability on mobile

💬 **Call to Action**:
- Ask a question or invite a share/comment

Special Instructions:
- Sound human, not like an advertisement
- Keep sentences short and punchy
- Match the tone and audience exactly
- Avoid clickbait that the body does not deliver
"#
}

fn story_caption() -> &'static str {
r#"
You are a social media caption specialist for Bangla-speaking audiences.

Topic: "{{TOPIC}}"
Tone: {{TONE}}
Audience: {{AUDIENCE}}
Preferences:
{{DETAILS}}

Write 5 alternative captions for a photo or story about the topic, in Bangla.

Structure:

✨ **Captions** (5 options):
For each caption include:
- The caption itself (1-3 lines)
- The mood it conveys
- Best platform (Facebook, Instagram, TikTok)

📌 **Usage Notes**:
- Which caption suits which kind of image
- Suggested posting time

Special Instructions:
- Each caption must stand alone
- Vary the style across the options
- Keep every caption easy to read aloud
"#
}

fn video_script() -> &'static str {
r#"
You are a short-form video scriptwriter for Bangla creators.

Topic: "{{TOPIC}}"
Tone: {{TONE}}
Audience: {{AUDIENCE}}
Preferences:
{{DETAILS}}

Write a 30-60 second vertical video script about the topic, in Bangla.

Structure:

🎬 **Opening Hook** (first 3 seconds):
- Line to say on camera
- On-screen text suggestion

🎥 **Scenes**:
For each scene include:
- Visual description
- Voice-over or dialogue
- Approximate duration

🎵 **Audio & Editing**:
- Music mood suggestion
- Transitions and cuts

📣 **Closing & Call to Action**:
- Final line
- What the viewer should do next

Special Instructions:
- Write for spoken delivery
- Keep the pacing fast
- Make the first 3 seconds irresistible
"#
}

/// Static template table.
pub fn template(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::ProjectIdeas => project_ideas(),
        ContentType::ProjectReport => project_report(),
        ContentType::AssignmentSolution => assignment_solution(),
        ContentType::ViralPost => viral_post(),
        ContentType::StoryCaption => story_caption(),
        ContentType::VideoScript => video_script(),
    }
}

fn keyword_instruction(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::ProjectIdeas => "Generate 10-15 relevant keywords and trending tags for these project ideas",
        ContentType::ProjectReport => "Generate 10-15 academic keywords and research tags for this project report",
        ContentType::AssignmentSolution => "Generate 10-15 study keywords and concept tags for this assignment topic",
        ContentType::ViralPost => "Generate 10-15 viral hashtags and trending keywords for this social media post",
        ContentType::StoryCaption => "Generate 10-15 catchy hashtags and mood keywords for these captions",
        ContentType::VideoScript => "Generate 10-15 discoverability hashtags and search keywords for this short video",
    }
}

fn details_text(details: &RequestDetails) -> String {
    match details {
        RequestDetails::Academic { additional_details } => match additional_details {
            Some(d) if !d.trim().is_empty() => d.clone(),
            _ => NO_DETAILS.to_string(),
        },
        RequestDetails::Social { word_count, include_hashtags, include_emojis } => {
            let words = match word_count {
                Some(n) if *n > 0 => format!("about {n} words"),
                _ => "no specific length".to_string(),
            };
            let yes_no = |b: bool| if b { "yes" } else { "no" };
            format!(
                "- Target length: {}\n- Include hashtags: {}\n- Include emojis: {}",
                words,
                yes_no(*include_hashtags),
                yes_no(*include_emojis)
            )
        }
    }
}

/// Main content prompt: template with placeholders filled, followed by the
/// variant's output contract. User text is substituted as-is.
pub fn build_content_prompt(req: &ContentRequest) -> String {
    let filled = template(req.content_type)
        .replacen(TOPIC, &req.topic, 1)
        .replacen(TONE, req.tone.as_str(), 1)
        .replacen(AUDIENCE, req.audience.as_str(), 1)
        .replacen(DETAILS, &details_text(&req.details), 1);
    format!("{}{}", filled, render_contract(&contract(req.variant())))
}

pub fn build_keyword_prompt(req: &ContentRequest) -> String {
    format!(
        "{} for topic: \"{}\"{}",
        keyword_instruction(req.content_type),
        req.topic,
        render_contract(&[KEYWORDS])
    )
}

pub fn suggestion_prompt(variant: Variant) -> &'static str {
    match variant {
        Variant::Academic => "Suggest 10 trending and popular topics for student projects, research, and assignments in technology and academia. Only provide topic names, one per line.",
        Variant::Social => "Suggest 10 trending topics that Bangladeshi social media users are talking about right now, written in Bangla. Only provide topic names, one per line.",
    }
}
