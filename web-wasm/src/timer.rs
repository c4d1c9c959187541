//! ブラウザのタイマー

use gloo::timers::future::TimeoutFuture;
use std::time::Duration;

/// 指定時間待つ（`setTimeout` ベース、上限は u32 ミリ秒）
pub fn sleep(delay: Duration) -> TimeoutFuture {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis)
}
