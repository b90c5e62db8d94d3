//! `transform` attribute strings applied to paths.

use kelpie::SvgPath;

mod translate {
    use super::*;

    #[test]
    fn x_only() {
        assert_eq!(
            SvgPath::parse("M10 10 L15 15").transform("translate(20)").to_string(),
            "M30 10L35 15"
        );
    }

    #[test]
    fn x_and_y() {
        assert_eq!(
            SvgPath::parse("M10 10 L15 15").transform("translate(20,10)").to_string(),
            "M30 20L35 25"
        );
    }

    #[test]
    fn x_and_y_with_relative_curves() {
        assert_eq!(
            SvgPath::parse("M10 10 c15 15, 20 10, 15 15")
                .transform("translate(20,10)")
                .to_string(),
            "M30 20c15 15 20 10 15 15"
        );
    }

    #[test]
    fn x_and_y_with_absolute_curves() {
        assert_eq!(
            SvgPath::parse("M10 10 C15 15, 20 10, 15 15")
                .transform("translate(20,10)")
                .to_string(),
            "M30 20C35 25 40 20 35 25"
        );
    }

    #[test]
    fn keeps_h_and_v_axis_aligned() {
        assert_eq!(
            SvgPath::parse("M0 0 H 10 V 10 Z M 100 100 h 15 v -10")
                .transform("translate(100,100)")
                .to_string(),
            "M100 100H110V110ZM200 200h15v-10"
        );
    }
}

mod rotate {
    use super::*;

    #[test]
    fn rotate_by_90_degrees_about_a_point() {
        assert_eq!(
            SvgPath::parse("M10 10L15 10").transform("rotate(90, 10, 10)").round(0).to_string(),
            "M10 10L10 15"
        );
    }

    #[test]
    fn rotate_by_minus_90_degrees_about_origin() {
        assert_eq!(
            SvgPath::parse("M0 10L0 20").transform("rotate(-90)").round(0).to_string(),
            "M10 0L20 0"
        );
    }

    #[test]
    fn upgrades_h_and_v_to_lines() {
        assert_eq!(
            SvgPath::parse("M0 0 H 10 v 5").transform("rotate(90)").round(0).to_string(),
            "M0 0L0 10l-5 0"
        );
    }
}

mod scale {
    use super::*;

    #[test]
    fn uniform() {
        assert_eq!(
            SvgPath::parse("M5 5L15 20").transform("scale(2)").to_string(),
            "M10 10L30 40"
        );
    }

    #[test]
    fn non_uniform() {
        assert_eq!(
            SvgPath::parse("M5 5L30 20").transform("scale(.5, 1.5)").to_string(),
            "M2.5 7.5L15 30"
        );
    }

    #[test]
    fn non_uniform_with_relative_segments() {
        assert_eq!(
            SvgPath::parse("M5 5c15 15, 20 10, 15 15")
                .transform("scale(.5, 1.5)")
                .to_string(),
            "M2.5 7.5c7.5 22.5 10 15 7.5 22.5"
        );
    }
}

mod skew {
    use super::*;

    #[test]
    fn skew_x() {
        assert_eq!(
            SvgPath::parse("M5 5L15 20").transform("skewX(75.96)").round(0).to_string(),
            "M25 5L95 20"
        );
    }

    #[test]
    fn skew_y() {
        assert_eq!(
            SvgPath::parse("M5 5L15 20").transform("skewY(75.96)").round(0).to_string(),
            "M5 25L15 80"
        );
    }
}

mod matrix {
    use super::*;

    #[test]
    fn absolute_segments() {
        assert_eq!(
            SvgPath::parse("M5 5 C20 30 10 15 30 15")
                .transform("matrix(1.5, 0.5, 0.5, 1.5 10, 15)")
                .to_string(),
            "M20 25C55 70 32.5 42.5 62.5 52.5"
        );
    }

    #[test]
    fn relative_segments() {
        assert_eq!(
            SvgPath::parse("M5 5 c10 12 10 15 20 30")
                .transform("matrix(1.5, 0.5, 0.5, 1.5 10, 15)")
                .to_string(),
            "M20 25c21 23 22.5 27.5 45 55"
        );
    }
}

mod combinations {
    use super::*;

    #[test]
    fn translate_of_scaled() {
        assert_eq!(
            SvgPath::parse("M0 0 L 10 10 20 10")
                .transform("translate(100,100) scale(2,3)")
                .to_string(),
            "M100 100L120 130 140 130"
        );
    }

    #[test]
    fn rotate_of_scaled() {
        assert_eq!(
            SvgPath::parse("M0 0 L 10 10 20 10")
                .transform("rotate(90) scale(2,3)")
                .round(0)
                .to_string(),
            "M0 0L-30 20-30 40"
        );
    }

    #[test]
    fn skew_of_scaled() {
        assert_eq!(
            SvgPath::parse("M0 0 L 10 10 20 10")
                .transform("skewX(75.96) scale(2,3)")
                .round(0)
                .to_string(),
            "M0 0L140 30 160 30"
        );
    }
}

mod misc {
    use super::*;

    #[test]
    fn effect_free_transforms_change_nothing() {
        assert_eq!(
            SvgPath::parse("M0 0 L 10 10 20 10")
                .transform("rotate(0) scale(1,1) translate(0,0) skewX(0) skewY(0)")
                .round(0)
                .to_string(),
            "M0 0L10 10 20 10"
        );
    }

    #[test]
    fn wrong_argument_counts_are_dropped() {
        assert_eq!(
            SvgPath::parse("M0 0 L 10 10 20 10")
                .transform("rotate(10,0) scale(10,10,1) translate(10,10,0) skewX(10,0) skewY(10,0) matrix(0)")
                .round(0)
                .to_string(),
            "M0 0L10 10 20 10"
        );
    }

    #[test]
    fn blank_transform_string_is_a_no_op() {
        assert_eq!(
            SvgPath::parse("M0 0 L 10 10").transform("  ").to_string(),
            "M0 0L10 10"
        );
    }
}
