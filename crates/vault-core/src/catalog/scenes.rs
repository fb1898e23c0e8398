//! Built-in visualization scene catalog.

use serde::{Deserialize, Serialize};

/// One guided visualization scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationScene {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Guidance text shown while the scene is displayed.
    pub prompt: String,
}

fn scene(id: &str, title: &str, description: &str, image_url: &str, prompt: &str) -> VisualizationScene {
    VisualizationScene {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        prompt: prompt.to_string(),
    }
}

/// The built-in visualization scene list.
pub fn builtin_scenes() -> Vec<VisualizationScene> {
    vec![
        scene(
            "1",
            "Penthouse View",
            "A luxurious penthouse overlooking a vibrant city skyline",
            "https://images.pexels.com/photos/1396122/pexels-photo-1396122.jpeg",
            "Imagine yourself waking up to this view every morning. How does it feel to have achieved this level of success?",
        ),
        scene(
            "2",
            "Beach Retreat",
            "A private beach with crystal clear waters and pristine sand",
            "https://images.pexels.com/photos/1174732/pexels-photo-1174732.jpeg",
            "Visualize yourself walking along this private beach, financially free and at peace. What decisions led you here?",
        ),
        scene(
            "3",
            "Investment Success",
            "A powerful image representing financial growth and investment returns",
            "https://images.pexels.com/photos/534216/pexels-photo-534216.jpeg",
            "See yourself confidently making investment decisions that consistently grow your wealth. What knowledge have you gained?",
        ),
        scene(
            "4",
            "Business Achievement",
            "A modern office representing your successful business venture",
            "https://images.pexels.com/photos/7070/space-desk-workspace-coworking.jpg",
            "Envision running your own successful business. How many people do you employ? What impact are you making?",
        ),
        scene(
            "5",
            "Generous Philanthropy",
            "A scene depicting your philanthropic impact on the world",
            "https://images.pexels.com/photos/6646918/pexels-photo-6646918.jpeg",
            "Imagine using your wealth to create positive change in the world. What causes are you supporting?",
        ),
    ]
}
