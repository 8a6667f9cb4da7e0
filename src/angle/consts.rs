pub(crate) const MINUTES_IN_DEGREE: i64 = 60;
pub(crate) const SECONDS_IN_MINUTE: i64 = 60;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

pub(crate) const HALF_TURN_DEG: i64 = 180;
pub(crate) const FULL_TURN_DEG: i64 = HALF_TURN_DEG << 1;
