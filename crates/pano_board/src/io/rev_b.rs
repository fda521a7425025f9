//! Revision B: xc6slx150, MII Ethernet PHY, serial headers not fitted.

use super::{iostd, misc};
use pano_platform::{Resource, Subsignal};

pub(super) fn resources() -> Vec<Resource> {
    vec![
        // Clk / Rst
        Resource::simple("clk100", 0, "U10").attr(iostd("LVCMOS33")),
        Resource::simple("rst_n", 0, "AB14").attr(iostd("LVCMOS33")),
        // Leds
        Resource::simple("user_led", 0, "H1").attr(iostd("LVCMOS33")),
        Resource::simple("user_led", 1, "L1").attr(iostd("LVCMOS33")),
        Resource::simple("user_led", 2, "L3").attr(iostd("LVCMOS33")),
        // Buttons
        Resource::simple("user_btn_n", 0, "R7").attr(iostd("LVCMOS33")),
        // Serial headers are not populated on this revision
        Resource::composite("serial", 0)
            .subsignal(Subsignal::new("tx", "AB19"))
            .subsignal(Subsignal::new("rx", "AA21"))
            .attr(iostd("LVCMOS33"))
            .not_fitted(),
        Resource::composite("serial", 1)
            .subsignal(Subsignal::new("tx", "C14"))
            .subsignal(Subsignal::new("rx", "C17"))
            .attr(iostd("LVCMOS33"))
            .not_fitted(),
        // SPI flash; mosi/miso may be swapped
        Resource::composite("spiflash", 0)
            .subsignal(Subsignal::new("cs_n", "U3").attr(iostd("LVCMOS33")))
            .subsignal(Subsignal::new("clk", "U16").attr(iostd("LVCMOS33")))
            .subsignal(Subsignal::new("mosi", "T4").attr(iostd("LVCMOS33")))
            .subsignal(Subsignal::new("miso", "N10").attr(iostd("LVCMOS33"))),
        // DDR2 SDRAM, chip A
        Resource::composite("ddram_clock_a", 0)
            .subsignal(Subsignal::new("p", "H20"))
            .subsignal(Subsignal::new("n", "J19"))
            .attr(iostd("DIFF_SSTL18_II"))
            .attr(misc("IN_TERM=NONE")),
        Resource::composite("ddram_a", 0)
            .subsignal(
                Subsignal::new("a", "F21 F22 E22 G20 F20 K20 K19 E20 C20 C22 G19 F19 D22")
                    .attr(iostd("SSTL18_II")),
            )
            .subsignal(Subsignal::new("ba", "J17 K17 H18").attr(iostd("SSTL18_II")))
            .subsignal(Subsignal::new("ras_n", "H21").attr(iostd("SSTL18_II")))
            .subsignal(Subsignal::new("cas_n", "H22").attr(iostd("SSTL18_II")))
            .subsignal(Subsignal::new("we_n", "H19").attr(iostd("SSTL18_II")))
            .subsignal(Subsignal::new("dm", "M20 L19").attr(iostd("SSTL18_II")))
            .subsignal(
                Subsignal::new("dq", "N20 N22 M21 M22 J20 J22 K21 K22 P21 P22 R20 R22 U20 U22 V21 V22")
                    .attr(iostd("SSTL18_II")),
            )
            .subsignal(Subsignal::new("dqs", "T21 L20").attr(iostd("DIFF_SSTL18_II")))
            .subsignal(Subsignal::new("dqs_n", "T22 L22").attr(iostd("DIFF_SSTL18_II")))
            .subsignal(Subsignal::new("cke", "D21").attr(iostd("SSTL18_II")))
            .subsignal(Subsignal::new("odt", "G22").attr(iostd("SSTL18_II"))),
        // DDR2 SDRAM, chip B
        Resource::composite("ddram_clock_b", 0)
            .subsignal(Subsignal::new("p", "H4"))
            .subsignal(Subsignal::new("n", "H3"))
            .attr(iostd("DIFF_SSTL18_II"))
            .attr(misc("IN_TERM=NONE")),
        Resource::composite("ddram_b", 0)
            .subsignal(
                Subsignal::new("a", "H2 H1 H5 K6 F3 K3 J4 H6 E3 E1 G4 C1 D1")
                    .attr(iostd("SSTL18_II")),
            )
            .subsignal(Subsignal::new("ba", "G3 G1 F1").attr(iostd("SSTL18_II")))
            .subsignal(Subsignal::new("ras_n", "K5").attr(iostd("SSTL18_II")))
            .subsignal(Subsignal::new("cas_n", "K4").attr(iostd("SSTL18_II")))
            .subsignal(Subsignal::new("we_n", "F2").attr(iostd("SSTL18_II")))
            .subsignal(Subsignal::new("dm", "M3 L4").attr(iostd("SSTL18_II")))
            .subsignal(
                Subsignal::new("dq", "N3 N1 M2 M1 J3 J1 K2 K1 P2 P1 R3 R1 U3 U1 V2 V1")
                    .attr(iostd("SSTL18_II")),
            )
            .subsignal(Subsignal::new("dqs", "T2 L3").attr(iostd("DIFF_SSTL18_II")))
            .subsignal(Subsignal::new("dqs_n", "T1 L1").attr(iostd("DIFF_SSTL18_II")))
            .subsignal(Subsignal::new("cke", "D2").attr(iostd("SSTL18_II")))
            .subsignal(Subsignal::new("odt", "J6").attr(iostd("SSTL18_II"))),
        // MII Ethernet: 4-bit data, no gigabit transmit clock
        Resource::composite("eth_clocks", 0)
            .subsignal(Subsignal::new("tx", "K5"))
            .subsignal(Subsignal::new("rx", "K4"))
            .attr(iostd("LVCMOS33")),
        Resource::composite("eth", 0)
            .subsignal(Subsignal::new("rst_n", "K3"))
            .subsignal(Subsignal::new("int_n", "T1"))
            .subsignal(Subsignal::new("mdio", "M5"))
            .subsignal(Subsignal::new("mdc", "T2"))
            .subsignal(Subsignal::new("rx_dv", "R1"))
            .subsignal(Subsignal::new("rx_er", "U1"))
            .subsignal(Subsignal::new("rx_data", "Y3 Y4 R9 R7"))
            .subsignal(Subsignal::new("tx_en", "R3"))
            .subsignal(Subsignal::new("tx_er", "R2"))
            .subsignal(Subsignal::new("tx_data", "AB2 AB3 AB4 AB7"))
            .subsignal(Subsignal::new("col", "N5"))
            .subsignal(Subsignal::new("crs", "N4"))
            .attr(iostd("LVCMOS33")),
    ]
}
