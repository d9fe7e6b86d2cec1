//! スコアカウントアップのタイマー制御
//!
//! 判定ロジック（増分・しきい値）はmedai_common::scoreにあり、
//! ここはタイマーの起動と停止だけを担う。

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Interval;
use leptos::prelude::*;
use medai_common::score::{count_up_increment, SCORE_ANIM_MS, SCORE_TICK_MS};

/// 0からtargetまで一定刻みでシグナルを更新する
///
/// 各Intervalは自分のtargetに到達した時点で自身をdropして止まる。
/// 旧アニメーションの走行中（1500ms以内）に再度呼ばれた場合、旧Intervalは
/// 自分の到達まで同じシグナルへ書き込み続け、値が一時的に交錯する。
/// 後から起動した方が後に到達するため、表示は常に新しいtargetに収束する。
pub fn animate_score(target: f64, set_value: WriteSignal<f64>) {
    set_value.set(0.0);

    let increment = count_up_increment(target, SCORE_ANIM_MS, SCORE_TICK_MS);
    let current = Rc::new(Cell::new(0.0_f64));
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let interval = Interval::new(SCORE_TICK_MS, {
        let current = current.clone();
        let handle = handle.clone();
        move || {
            let next = current.get() + increment;
            if next >= target {
                set_value.set(target);
                // dropでclearIntervalされる
                handle.borrow_mut().take();
            } else {
                current.set(next);
                set_value.set(next);
            }
        }
    });

    *handle.borrow_mut() = Some(interval);
}
