pub mod hypercert_svg;
