//! Máscaras de entrada
//!
//! Solo afectan a lo que se muestra: `0` es un hueco para un dígito y
//! cualquier otro carácter es un literal que se inserta a medida que se
//! escriben dígitos. Los dígitos que sobran se descartan. La validación
//! siempre trabaja sobre los dígitos.

use crate::utils::validation::only_digits;

pub const CPF_MASK: InputMask = InputMask::new("000.000.000-00");
pub const PHONE_MASK: InputMask = InputMask::new("+00 (00) 00000-0000");
pub const CNH_MASK: InputMask = InputMask::new("00000000000");

const DIGIT_SLOT: char = '0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputMask {
    pattern: &'static str,
}

impl InputMask {
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    /// Cantidad de dígitos que caben en la máscara
    pub fn capacity(&self) -> usize {
        self.pattern.chars().filter(|c| *c == DIGIT_SLOT).count()
    }

    /// Formatear lo que escribió el usuario
    pub fn apply(&self, input: &str) -> String {
        let digits = only_digits(input);
        let mut digits = digits.chars();
        let mut output = String::with_capacity(self.pattern.len());
        let mut pending_literals = String::new();

        for slot in self.pattern.chars() {
            if slot != DIGIT_SLOT {
                pending_literals.push(slot);
                continue;
            }
            match digits.next() {
                Some(digit) => {
                    output.push_str(&pending_literals);
                    pending_literals.clear();
                    output.push(digit);
                }
                None => break,
            }
        }

        output
    }
}
