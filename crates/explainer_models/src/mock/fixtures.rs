use super::TopicBucket;
use serde_json::{Value, json};

pub(super) fn script(bucket: TopicBucket) -> Value {
    match bucket {
        TopicBucket::Photosynthesis => json!({
            "scenes": [
                {
                    "scene_number": 1,
                    "narration": "Photosynthesis is the process by which plants use sunlight, water, and carbon dioxide to create oxygen and energy in the form of sugar.",
                    "explanation": "Definition of Photosynthesis"
                },
                {
                    "scene_number": 2,
                    "narration": "Roots absorb water from the ground, while leaves take in carbon dioxide from the air and capture energy from the sun.",
                    "explanation": "Inputs explanation"
                },
                {
                    "scene_number": 3,
                    "narration": "The plant creates glucose for growth and releases oxygen back into the air as a byproduct.",
                    "explanation": "Outputs explanation"
                }
            ]
        }),
        TopicBucket::NeuralNetworks => json!({
            "scenes": [
                {
                    "scene_number": 1,
                    "narration": "Neural networks are computing systems inspired by the biological neural networks that constitute animal brains.",
                    "explanation": "Definition of Neural Networks"
                },
                {
                    "scene_number": 2,
                    "narration": "They consist of layers of nodes, called neurons, which process specific features of the input data.",
                    "explanation": "Explaining layers and neurons"
                },
                {
                    "scene_number": 3,
                    "narration": "Information flows through these layers, getting transformed at each step to produce a final output.",
                    "explanation": "Data flow description"
                }
            ]
        }),
    }
}

pub(super) fn blueprint(bucket: TopicBucket) -> Value {
    match bucket {
        TopicBucket::Photosynthesis => json!({
            "blueprint": [
                {
                    "scene_number": 1,
                    "visual_elements": ["sun_icon", "leaf_shape"],
                    "text_overlays": ["Sunlight", "Energy"],
                    "animation_actions": ["fade-in", "pulse"],
                    "duration_seconds": 6,
                    "transition": "fade",
                    "asset_prompt": "Vector icon of sun shining on a leaf"
                },
                {
                    "scene_number": 2,
                    "visual_elements": ["water_drop", "co2_cloud", "arrow_into_leaf"],
                    "text_overlays": ["H2O + CO2", "Inputs"],
                    "animation_actions": ["slide-down", "draw-arrow"],
                    "duration_seconds": 8,
                    "transition": "slide",
                    "asset_prompt": "Diagram showing water and air entering a leaf"
                },
                {
                    "scene_number": 3,
                    "visual_elements": ["sugar_cube", "oxygen_bubble", "arrow_out"],
                    "text_overlays": ["Glucose", "Oxygen"],
                    "animation_actions": ["transform", "float-up"],
                    "duration_seconds": 7,
                    "transition": "fade",
                    "asset_prompt": "Sugar and oxygen output visualization"
                }
            ]
        }),
        TopicBucket::NeuralNetworks => json!({
            "blueprint": [
                {
                    "scene_number": 1,
                    "visual_elements": ["brain_icon", "network_nodes"],
                    "text_overlays": ["Neural Network"],
                    "animation_actions": ["fade-in", "pulse"],
                    "duration_seconds": 6,
                    "transition": "fade",
                    "asset_prompt": "Abstract line art of a brain using network nodes"
                },
                {
                    "scene_number": 2,
                    "visual_elements": ["layers", "circles", "arrows"],
                    "text_overlays": ["Input Layer", "Hidden Layer"],
                    "animation_actions": ["slide-in-left", "highlight"],
                    "duration_seconds": 8,
                    "transition": "slide",
                    "asset_prompt": "Vector diagram of neural network layers"
                },
                {
                    "scene_number": 3,
                    "visual_elements": ["data_stream", "arrow_flow"],
                    "text_overlays": ["Data Flow", "Output"],
                    "animation_actions": ["draw-line", "move-right"],
                    "duration_seconds": 7,
                    "transition": "fade",
                    "asset_prompt": "Flowchart arrow moving through nodes"
                }
            ]
        }),
    }
}
