//! Screenshot mode: captures the statistics panel on every tab and exits.
//!
//! Enabled by setting `COLONY_SCREENSHOTS`.

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use ui::statistics_panel::{StatisticsPanelState, StatisticsTab};

const WARMUP_FRAMES: u32 = 60;
const FRAMES_PER_SHOT: u32 = 12;

#[derive(Resource, Default)]
pub struct ScreenshotQueue {
    frame: u32,
    current: usize,
}

fn tab_slug(tab: StatisticsTab) -> &'static str {
    match tab {
        StatisticsTab::Resources => "resources",
        StatisticsTab::Buildings => "buildings",
        StatisticsTab::Transportation => "transportation",
    }
}

pub fn drive_screenshots(
    mut commands: Commands,
    mut queue: ResMut<ScreenshotQueue>,
    mut panel: ResMut<StatisticsPanelState>,
    mut exit: EventWriter<AppExit>,
) {
    queue.frame += 1;
    if queue.frame < WARMUP_FRAMES {
        return;
    }

    let idx = queue.current;
    let Some(&tab) = StatisticsTab::ALL.get(idx) else {
        let shots = StatisticsTab::ALL.len() as u32;
        if queue.frame > WARMUP_FRAMES + shots * FRAMES_PER_SHOT + 20 {
            exit.send(AppExit::Success);
        }
        return;
    };

    let phase = (queue.frame - WARMUP_FRAMES) % FRAMES_PER_SHOT;
    if phase == 0 {
        panel.tab = tab;
    } else if phase == FRAMES_PER_SHOT / 2 {
        let path = format!("/tmp/colony_statistics_{}.png", tab_slug(tab));
        info!("Screenshots: saving {path}");
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path));
        queue.current += 1;
    }
}
