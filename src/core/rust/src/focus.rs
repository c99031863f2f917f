/* src/core/rust/src/focus.rs */

use std::time::Duration;

/// Time given to a freshly navigated view to mount before focus moves.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
  /// First link, button or `tabindex="0"` element. Used on initial load.
  FirstInteractive,
  /// The page's single top-level heading.
  PageHeading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusPlan {
  pub target: FocusTarget,
  pub generation: u64,
  pub delay: Duration,
}

/// Element handle understood by a [`FocusHost`].
pub type ElementId = usize;

/// What the coordinator needs from the rendered page.
pub trait FocusHost {
  fn first_interactive(&self) -> Option<ElementId>;

  fn top_heading(&self) -> Option<ElementId>;

  /// Give the element `tabindex="-1"` so it can receive programmatic focus.
  fn make_focusable(&mut self, id: ElementId);

  fn focus(&mut self, id: ElementId, prevent_scroll: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
  Focused(ElementId),
  /// The page had no element of the requested kind.
  Missing,
  /// A newer navigation superseded the plan.
  Stale,
}

/// Moves focus once per navigation. Each path change invalidates any plan
/// still waiting on its delay.
#[derive(Debug, Default)]
pub struct FocusCoordinator {
  last_path: Option<String>,
  generation: u64,
}

impl FocusCoordinator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn on_path_change(&mut self, path: &str) -> Option<FocusPlan> {
    let target = match self.last_path.as_deref() {
      None => FocusTarget::FirstInteractive,
      Some(prev) if prev == path => return None,
      Some(_) => FocusTarget::PageHeading,
    };
    self.last_path = Some(path.to_string());
    self.generation += 1;
    Some(FocusPlan { target, generation: self.generation, delay: SETTLE_DELAY })
  }

  pub fn execute(&self, plan: &FocusPlan, host: &mut dyn FocusHost) -> FocusOutcome {
    if plan.generation != self.generation {
      tracing::debug!(generation = plan.generation, current = self.generation, "dropping stale focus plan");
      return FocusOutcome::Stale;
    }
    match plan.target {
      FocusTarget::FirstInteractive => match host.first_interactive() {
        Some(id) => {
          host.focus(id, true);
          FocusOutcome::Focused(id)
        }
        None => FocusOutcome::Missing,
      },
      FocusTarget::PageHeading => match host.top_heading() {
        Some(id) => {
          host.make_focusable(id);
          host.focus(id, true);
          FocusOutcome::Focused(id)
        }
        None => FocusOutcome::Missing,
      },
    }
  }

  /// Wait out the plan's delay, then execute it.
  pub async fn run(&self, plan: FocusPlan, host: &mut dyn FocusHost) -> FocusOutcome {
    tokio::time::sleep(plan.delay).await;
    self.execute(&plan, host)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Default)]
  struct FakePage {
    interactive: Option<ElementId>,
    heading: Option<ElementId>,
    focusable: Vec<ElementId>,
    focused: Vec<(ElementId, bool)>,
  }

  impl FocusHost for FakePage {
    fn first_interactive(&self) -> Option<ElementId> {
      self.interactive
    }

    fn top_heading(&self) -> Option<ElementId> {
      self.heading
    }

    fn make_focusable(&mut self, id: ElementId) {
      self.focusable.push(id);
    }

    fn focus(&mut self, id: ElementId, prevent_scroll: bool) {
      self.focused.push((id, prevent_scroll));
    }
  }

  #[test]
  fn first_load_targets_first_interactive() {
    let mut coordinator = FocusCoordinator::new();
    let plan = coordinator.on_path_change("/en/").unwrap();
    assert_eq!(plan.target, FocusTarget::FirstInteractive);
    assert_eq!(plan.delay, SETTLE_DELAY);

    let mut page = FakePage { interactive: Some(3), heading: Some(7), ..Default::default() };
    assert_eq!(coordinator.execute(&plan, &mut page), FocusOutcome::Focused(3));
    assert!(page.focusable.is_empty());
  }

  #[test]
  fn later_navigations_target_the_heading() {
    let mut coordinator = FocusCoordinator::new();
    coordinator.on_path_change("/en/");
    let plan = coordinator.on_path_change("/en/blog").unwrap();
    assert_eq!(plan.target, FocusTarget::PageHeading);

    let mut page = FakePage { interactive: Some(3), heading: Some(7), ..Default::default() };
    assert_eq!(coordinator.execute(&plan, &mut page), FocusOutcome::Focused(7));
    assert_eq!(page.focusable, vec![7]);
    assert_eq!(page.focused, vec![(7, true)]);
  }

  #[test]
  fn same_path_plans_nothing() {
    let mut coordinator = FocusCoordinator::new();
    coordinator.on_path_change("/en/blog");
    assert!(coordinator.on_path_change("/en/blog").is_none());
  }

  #[test]
  fn superseded_plan_is_dropped() {
    let mut coordinator = FocusCoordinator::new();
    let first = coordinator.on_path_change("/en/").unwrap();
    let second = coordinator.on_path_change("/es/").unwrap();

    let mut page = FakePage { interactive: Some(1), heading: Some(2), ..Default::default() };
    assert_eq!(coordinator.execute(&first, &mut page), FocusOutcome::Stale);
    assert_eq!(coordinator.execute(&second, &mut page), FocusOutcome::Focused(2));
    assert_eq!(page.focused.len(), 1);
  }

  #[test]
  fn missing_heading_is_reported() {
    let mut coordinator = FocusCoordinator::new();
    coordinator.on_path_change("/en/");
    let plan = coordinator.on_path_change("/en/blog").unwrap();
    assert_eq!(coordinator.execute(&plan, &mut FakePage::default()), FocusOutcome::Missing);
  }

  #[tokio::test(start_paused = true)]
  async fn run_waits_for_the_view_to_settle() {
    let mut coordinator = FocusCoordinator::new();
    let plan = coordinator.on_path_change("/it/").unwrap();
    let mut page = FakePage { interactive: Some(4), ..Default::default() };

    let started = tokio::time::Instant::now();
    assert_eq!(coordinator.run(plan, &mut page).await, FocusOutcome::Focused(4));
    assert!(started.elapsed() >= SETTLE_DELAY);
  }
}
