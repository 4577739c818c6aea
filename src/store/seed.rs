use crate::models::{NewEducationalContent, NewMotivationalQuote};

fn article(
    title: &str,
    description: &str,
    content_type: &str,
    category: &str,
    image: &str,
    video_url: Option<&str>,
    tags: &[&str],
) -> NewEducationalContent {
    NewEducationalContent {
        title: title.to_string(),
        description: description.to_string(),
        content_type: content_type.to_string(),
        category: category.to_string(),
        image_url: format!("/images/content/{image}"),
        video_url: video_url.map(str::to_string),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn content() -> Vec<NewEducationalContent> {
    vec![
        article(
            "Understanding PCOS",
            "What polycystic ovary syndrome is, the common types and how it is diagnosed.",
            "article",
            "PCOS",
            "understanding-pcos.jpg",
            None,
            &["pcos", "basics", "diagnosis"],
        ),
        article(
            "Eating for Insulin Resistance",
            "Building balanced plates with low-GI carbs, protein and fibre to steady blood sugar.",
            "article",
            "Nutrition",
            "insulin-resistance-plate.jpg",
            None,
            &["nutrition", "insulin", "blood sugar"],
        ),
        article(
            "Anti-inflammatory Foods Guide",
            "Everyday foods that help calm inflammation and how to add them to your week.",
            "guide",
            "Nutrition",
            "anti-inflammatory.jpg",
            None,
            &["nutrition", "inflammation"],
        ),
        article(
            "Gentle Strength Training",
            "A twenty minute routine that supports hormone balance without overtraining.",
            "video",
            "Exercise",
            "strength-training.jpg",
            Some("https://www.youtube.com/watch?v=strength-pcos"),
            &["exercise", "strength", "beginner"],
        ),
        article(
            "Your Cycle, Phase by Phase",
            "How energy, mood and appetite shift through the menstrual, follicular, ovulatory and luteal phases.",
            "article",
            "Cycle",
            "cycle-phases.jpg",
            None,
            &["cycle", "hormones", "tracking"],
        ),
        article(
            "Managing Stress and Anxiety",
            "Breathing exercises and journaling prompts for the harder days.",
            "article",
            "Mental Health",
            "stress-management.jpg",
            None,
            &["mental health", "stress", "journaling"],
        ),
        article(
            "Sleep and Hormones",
            "Why sleep quality matters for your cycle and simple habits that improve it.",
            "video",
            "Lifestyle",
            "sleep-hormones.jpg",
            Some("https://www.youtube.com/watch?v=sleep-hormones"),
            &["sleep", "lifestyle"],
        ),
    ]
}

fn quote(quote: &str, author: &str, category: &str) -> NewMotivationalQuote {
    NewMotivationalQuote {
        quote: quote.to_string(),
        author: author.to_string(),
        category: category.to_string(),
    }
}

pub fn quotes() -> Vec<NewMotivationalQuote> {
    vec![
        quote(
            "Almost everything will work again if you unplug it for a few minutes, including you.",
            "Anne Lamott",
            "self-care",
        ),
        quote(
            "You yourself, as much as anybody in the entire universe, deserve your love and affection.",
            "Sharon Salzberg",
            "self-love",
        ),
        quote(
            "Take care of your body. It's the only place you have to live.",
            "Jim Rohn",
            "health",
        ),
        quote(
            "Rest when you're weary. Refresh and renew yourself, your body, your mind, your spirit.",
            "Ralph Marston",
            "self-care",
        ),
        quote(
            "Healing is a matter of time, but it is sometimes also a matter of opportunity.",
            "Hippocrates",
            "health",
        ),
        quote(
            "Small steps every day add up to big results.",
            "Unknown",
            "motivation",
        ),
        quote(
            "Be gentle with yourself, you're doing the best you can.",
            "Unknown",
            "self-love",
        ),
    ]
}
