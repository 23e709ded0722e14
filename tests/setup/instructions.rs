use goalify_client::instructions::{
    ApproveBuilder, BetBuilder, CreateGoalBuilder, DistributeBuilder,
    InitializeRegistryBuilder, OnboardBuilder, ViewPotBuilder,
};
use litesvm::types::TransactionResult;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer as SolanaSigner},
};

use crate::setup::{Accounts, TestFixture};
use utils::Utils;

pub trait Instructions {
    fn initialize_registry(&mut self, payer: &Keypair) -> TransactionResult;

    fn create_goal(
        &mut self,
        staker: &Keypair,
        goal_statement: String,
        bet_size: u64,
        duration: i64,
    ) -> TransactionResult;

    fn set_sponsor(&mut self, sponsor: &Keypair, goal_id: u64) -> TransactionResult;

    fn set_judge(&mut self, judge: &Keypair, goal_id: u64) -> TransactionResult;

    fn bet(&mut self, bettor: &Keypair, goal_id: u64, value: u64) -> TransactionResult;

    fn approve(&mut self, judge: &Keypair, goal_id: u64, decision: u8) -> TransactionResult;

    fn distribute(
        &mut self,
        caller: &Keypair,
        goal_id: u64,
        recipient: &Pubkey,
    ) -> TransactionResult;

    fn view_pot(&mut self, caller: &Keypair, goal_id: u64) -> TransactionResult;
}

impl Instructions for TestFixture {
    fn initialize_registry(&mut self, payer: &Keypair) -> TransactionResult {
        let payer_pubkey = payer.pubkey();

        let ix = InitializeRegistryBuilder::new()
            .payer(payer_pubkey)
            .registry(self.find_registry_pda().0)
            .instruction();

        self.svm.send_tx(&[ix], &payer_pubkey, &[payer])
    }

    fn create_goal(
        &mut self,
        staker: &Keypair,
        goal_statement: String,
        bet_size: u64,
        duration: i64,
    ) -> TransactionResult {
        let staker_pubkey = staker.pubkey();
        let goal_id = self.get_registry().goal_count;
        let (goal_pda, _) = self.find_goal_pda(goal_id);
        let (vault_pda, _) = self.find_vault_pda(goal_id);

        let ix = CreateGoalBuilder::new()
            .staker(staker_pubkey)
            .registry(self.find_registry_pda().0)
            .goal(goal_pda)
            .vault(vault_pda)
            .goal_statement(goal_statement)
            .bet_size(bet_size)
            .duration(duration)
            .instruction();

        self.svm.send_tx(&[ix], &staker_pubkey, &[staker])
    }

    fn set_sponsor(&mut self, sponsor: &Keypair, goal_id: u64) -> TransactionResult {
        let sponsor_pubkey = sponsor.pubkey();

        let ix = OnboardBuilder::new()
            .member(sponsor_pubkey)
            .goal(self.find_goal_pda(goal_id).0)
            .registry(self.find_registry_pda().0)
            .set_sponsor_instruction();

        self.svm.send_tx(&[ix], &sponsor_pubkey, &[sponsor])
    }

    fn set_judge(&mut self, judge: &Keypair, goal_id: u64) -> TransactionResult {
        let judge_pubkey = judge.pubkey();

        let ix = OnboardBuilder::new()
            .member(judge_pubkey)
            .goal(self.find_goal_pda(goal_id).0)
            .registry(self.find_registry_pda().0)
            .set_judge_instruction();

        self.svm.send_tx(&[ix], &judge_pubkey, &[judge])
    }

    fn bet(&mut self, bettor: &Keypair, goal_id: u64, value: u64) -> TransactionResult {
        let bettor_pubkey = bettor.pubkey();

        let ix = BetBuilder::new()
            .bettor(bettor_pubkey)
            .goal(self.find_goal_pda(goal_id).0)
            .vault(self.find_vault_pda(goal_id).0)
            .registry(self.find_registry_pda().0)
            .value(value)
            .instruction();

        self.svm.send_tx(&[ix], &bettor_pubkey, &[bettor])
    }

    fn approve(&mut self, judge: &Keypair, goal_id: u64, decision: u8) -> TransactionResult {
        let judge_pubkey = judge.pubkey();

        let ix = ApproveBuilder::new()
            .judge(judge_pubkey)
            .goal(self.find_goal_pda(goal_id).0)
            .registry(self.find_registry_pda().0)
            .decision(decision)
            .instruction();

        self.svm.send_tx(&[ix], &judge_pubkey, &[judge])
    }

    fn distribute(
        &mut self,
        caller: &Keypair,
        goal_id: u64,
        recipient: &Pubkey,
    ) -> TransactionResult {
        let caller_pubkey = caller.pubkey();

        let ix = DistributeBuilder::new()
            .caller(caller_pubkey)
            .goal(self.find_goal_pda(goal_id).0)
            .vault(self.find_vault_pda(goal_id).0)
            .recipient(*recipient)
            .registry(self.find_registry_pda().0)
            .instruction();

        self.svm.send_tx(&[ix], &caller_pubkey, &[caller])
    }

    fn view_pot(&mut self, caller: &Keypair, goal_id: u64) -> TransactionResult {
        let caller_pubkey = caller.pubkey();

        let ix = ViewPotBuilder::new()
            .goal(self.find_goal_pda(goal_id).0)
            .instruction();

        self.svm.send_tx(&[ix], &caller_pubkey, &[caller])
    }
}
