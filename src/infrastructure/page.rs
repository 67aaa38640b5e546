// In-memory page surface with named insertion points and canvases
use crate::application::surface::{ChartHandle, Node, Surface, SurfaceError};
use crate::application::updaters::ids;
use crate::domain::chart::ChartConfig;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    pub text: String,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChart {
    pub id: u64,
    pub config: ChartConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    pub chart: Option<LiveChart>,
    pub attached: u32,
    pub destroyed: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    elements: BTreeMap<String, Element>,
    canvases: BTreeMap<String, Canvas>,
    #[serde(skip)]
    next_chart_id: u64,
}

impl Page {
    pub fn new(element_ids: &[&str], canvas_ids: &[&str]) -> Self {
        Self {
            elements: element_ids
                .iter()
                .map(|id| (id.to_string(), Element::default()))
                .collect(),
            canvases: canvas_ids
                .iter()
                .map(|id| (id.to_string(), Canvas::default()))
                .collect(),
            next_chart_id: 1,
        }
    }

    /// The dashboard shell with every insertion point the updaters write to
    pub fn dashboard_shell() -> Self {
        Self::new(&ids::ELEMENTS, &ids::CANVASES)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text.as_str())
    }

    pub fn children(&self, id: &str) -> &[Node] {
        self.elements
            .get(id)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
    }

    pub fn children_with_class<'a>(&'a self, id: &str, class: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children(id).iter().filter(move |n| n.class == class)
    }

    pub fn live_charts(&self) -> impl Iterator<Item = (&str, &LiveChart)> {
        self.canvases
            .iter()
            .filter_map(|(id, c)| c.chart.as_ref().map(|chart| (id.as_str(), chart)))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, SurfaceError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| SurfaceError::MissingElement(id.to_string()))
    }

    fn canvas_mut(&mut self, id: &str) -> Result<&mut Canvas, SurfaceError> {
        self.canvases
            .get_mut(id)
            .ok_or_else(|| SurfaceError::MissingElement(id.to_string()))
    }
}

#[cfg(test)]
impl Page {
    pub fn canvas(&self, id: &str) -> Option<&Canvas> {
        self.canvases.get(id)
    }

    pub fn live_chart(&self, canvas: &str) -> Option<&LiveChart> {
        self.canvases.get(canvas).and_then(|c| c.chart.as_ref())
    }

    pub fn live_chart_count(&self, canvas: &str) -> usize {
        self.live_chart(canvas).map_or(0, |_| 1)
    }
}

impl Surface for Page {
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), SurfaceError> {
        let element = self.element_mut(id)?;
        element.children.clear();
        element.text = text.to_string();
        Ok(())
    }

    fn clear(&mut self, id: &str) -> Result<(), SurfaceError> {
        let element = self.element_mut(id)?;
        element.children.clear();
        element.text.clear();
        Ok(())
    }

    fn append(&mut self, id: &str, node: Node) -> Result<(), SurfaceError> {
        self.element_mut(id)?.children.push(node);
        Ok(())
    }

    fn attach_chart(&mut self, canvas: &str, config: ChartConfig) -> Result<ChartHandle, SurfaceError> {
        let id = self.next_chart_id.max(1);
        let slot = self.canvas_mut(canvas)?;
        if slot.chart.is_some() {
            return Err(SurfaceError::CanvasInUse(canvas.to_string()));
        }
        slot.chart = Some(LiveChart { id, config });
        slot.attached += 1;
        self.next_chart_id = id + 1;

        tracing::debug!(canvas, chart_id = id, "Chart attached");
        Ok(ChartHandle::new(id, canvas))
    }

    fn destroy_chart(&mut self, handle: ChartHandle) -> Result<(), SurfaceError> {
        let slot = self.canvas_mut(handle.canvas())?;
        let is_live = slot
            .chart
            .as_ref()
            .is_some_and(|live| live.id == handle.id());
        if !is_live {
            return Err(SurfaceError::StaleChart {
                id: handle.id(),
                canvas: handle.canvas().to_string(),
            });
        }

        slot.chart = None;
        slot.destroyed += 1;
        tracing::debug!(canvas = handle.canvas(), chart_id = handle.id(), "Chart destroyed");
        Ok(())
    }
}
