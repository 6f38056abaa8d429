//! Domain layer
//! 리뷰 게시 규칙(엔티티/값 객체)을 외부 의존성 없이 표현한다.

pub mod review;
