use tracing::trace;

use crate::error::{AxesError, AxesResult};
use crate::render::{LabelContainer, LabelDescriptor, LabelHandle};

/// Labels computed during one draw pass, not yet visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedLabels {
    pub x_labels: Vec<LabelDescriptor>,
    pub y_labels: Vec<LabelDescriptor>,
    pub headers: Vec<LabelDescriptor>,
}

impl StagedLabels {
    #[must_use]
    pub fn len(&self) -> usize {
        self.x_labels.len() + self.y_labels.len() + self.headers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttachedLabel {
    pub handle: LabelHandle,
    pub descriptor: LabelDescriptor,
}

/// Owns the x-label, y-label and header collections of the current redraw.
///
/// Labels become visible together through `attach_all` and disappear together
/// through `detach_all`.
#[derive(Debug, Default)]
pub struct LabelLifecycleManager {
    x_labels: Vec<AttachedLabel>,
    y_labels: Vec<AttachedLabel>,
    headers: Vec<AttachedLabel>,
}

impl LabelLifecycleManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn x_labels(&self) -> &[AttachedLabel] {
        &self.x_labels
    }

    #[must_use]
    pub fn y_labels(&self) -> &[AttachedLabel] {
        &self.y_labels
    }

    #[must_use]
    pub fn headers(&self) -> &[AttachedLabel] {
        &self.headers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x_labels.len() + self.y_labels.len() + self.headers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attaches every staged label (headers, then y, then x labels).
    ///
    /// The collections must be empty; accumulating on top of a previous pass
    /// is refused.
    pub fn attach_all(
        &mut self,
        container: &mut dyn LabelContainer,
        staged: StagedLabels,
    ) -> AxesResult<()> {
        if !self.is_empty() {
            return Err(AxesError::InvalidData(format!(
                "label collections still hold {} labels from a previous pass",
                self.len()
            )));
        }

        let StagedLabels {
            x_labels,
            y_labels,
            headers,
        } = staged;
        self.headers = attach_each(container, headers);
        self.y_labels = attach_each(container, y_labels);
        self.x_labels = attach_each(container, x_labels);
        trace!(
            headers = self.headers.len(),
            y_labels = self.y_labels.len(),
            x_labels = self.x_labels.len(),
            "attached axis labels"
        );
        Ok(())
    }

    /// Detaches every tracked label and empties all three collections.
    ///
    /// Returns how many labels were tracked.
    pub fn detach_all(&mut self, container: &mut dyn LabelContainer) -> usize {
        let mut removed = 0;
        for collection in [&mut self.x_labels, &mut self.y_labels, &mut self.headers] {
            for label in collection.drain(..) {
                // already-removed elements are fine; the container owns their fate
                container.detach(label.handle);
                removed += 1;
            }
        }
        removed
    }
}

fn attach_each(
    container: &mut dyn LabelContainer,
    labels: Vec<LabelDescriptor>,
) -> Vec<AttachedLabel> {
    labels
        .into_iter()
        .map(|descriptor| AttachedLabel {
            handle: container.attach(&descriptor),
            descriptor,
        })
        .collect()
}
