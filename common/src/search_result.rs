use serde::{Deserialize, Serialize};


/// Box in OCR pixel space, top-left origin, expressed as `xywh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl BoundingBox {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }

    /// Media fragment suffix, e.g. `xywh=12,0,38,10`.
    pub fn xywh_fragment(&self) -> String {
        format!("xywh={},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

/// A single matched phrase anchored to a region of a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub text: String,
    pub canvas_id: String,
    pub bounding_box: BoundingBox,
}

impl Annotation {
    /// Canvas identifier with the bounding box fragment appended.
    pub fn canvas_target(&self) -> String {
        format!("{}#{}", self.canvas_id, self.bounding_box.xywh_fragment())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub annotation_ids: Vec<String>,
    pub match_text: String,
}

/// Output of the annotation pipeline for one search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CanvasSearchResults {
    pub annotations: Vec<Annotation>,
    pub hits: Vec<Hit>,
    /// Number of matching documents reported by the index, across all pages.
    pub total: u64,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_target_appends_fragment() {
        let annotation = Annotation {
            id: "a".into(),
            text: "quick brown".into(),
            canvas_id: "https://example.org/canvas/1".into(),
            bounding_box: BoundingBox::new(12, 0, 38, 10),
        };
        assert_eq!(annotation.canvas_target(), "https://example.org/canvas/1#xywh=12,0,38,10");
    }
}
