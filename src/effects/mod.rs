pub mod mask_reveal;
